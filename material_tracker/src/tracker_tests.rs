//! Unit tests for the project tracker.

use super::*;
use crate::store::{MemoryProjectStore, SqliteProjectStore};
use litematica_common::ParseError;

const EXPORT: &str = "\
+--------------------------------------+-------+---------+-----------+
| Material List for placement 'Lighthouse' |
+--------------------------------------+-------+---------+-----------+
| Item                                 | Total | Missing | Available |
+--------------------------------------+-------+---------+-----------+
| White Concrete                       |  1800 |    1800 |       200 |
| Sea Lantern                          |    24 |      10 |         0 |
+--------------------------------------+-------+---------+-----------+";

fn tracker() -> ProjectTracker<MemoryProjectStore> {
    ProjectTracker::new(MemoryProjectStore::new())
}

mod project_tests {
    use super::*;

    #[test]
    fn import_names_project_after_title() {
        let mut tracker = tracker();
        let project = tracker.import_text(EXPORT, None).unwrap();
        assert_eq!(project.name, "Lighthouse");
        assert_eq!(project.material_list.items.len(), 2);
        assert_eq!(
            tracker.active_project_id().unwrap(),
            Some(project.id.clone())
        );
    }

    #[test]
    fn import_with_explicit_name() {
        let mut tracker = tracker();
        let project = tracker.import_text(EXPORT, Some("Coast build")).unwrap();
        assert_eq!(project.name, "Coast build");
        assert_eq!(project.material_list.title, "Lighthouse");
    }

    #[test]
    fn import_failure_stores_nothing() {
        let mut tracker = tracker();
        let err = tracker.import_text("not a material list", None).unwrap_err();
        assert!(matches!(err, TrackerError::Parse(ParseError::HeaderNotFound)));
        assert!(tracker.projects().unwrap().is_empty());
        assert!(tracker.active_project().unwrap().is_none());
    }

    #[test]
    fn newest_import_becomes_active() {
        let mut tracker = tracker();
        let first = tracker.import_text(EXPORT, Some("First")).unwrap();
        let second = tracker.import_text(EXPORT, Some("Second")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(tracker.active_project().unwrap().unwrap().name, "Second");
        assert_eq!(tracker.projects().unwrap().len(), 2);
    }

    #[test]
    fn set_active_project_switches_selection() {
        let mut tracker = tracker();
        let first = tracker.import_text(EXPORT, Some("First")).unwrap();
        tracker.import_text(EXPORT, Some("Second")).unwrap();

        tracker.set_active_project(&first.id).unwrap();
        assert_eq!(tracker.active_project().unwrap().unwrap().name, "First");
    }

    #[test]
    fn set_active_unknown_project_fails() {
        let mut tracker = tracker();
        let err = tracker.set_active_project("project-nope").unwrap_err();
        assert!(matches!(err, TrackerError::ProjectNotFound(id) if id == "project-nope"));
    }

    #[test]
    fn removing_active_project_selects_first_remaining() {
        let mut tracker = tracker();
        let first = tracker.import_text(EXPORT, Some("First")).unwrap();
        tracker.import_text(EXPORT, Some("Second")).unwrap();
        let third = tracker.import_text(EXPORT, Some("Third")).unwrap();

        tracker.remove_project(&third.id).unwrap();
        assert_eq!(tracker.active_project_id().unwrap(), Some(first.id));
    }

    #[test]
    fn removing_inactive_project_keeps_selection() {
        let mut tracker = tracker();
        let first = tracker.import_text(EXPORT, Some("First")).unwrap();
        let second = tracker.import_text(EXPORT, Some("Second")).unwrap();

        tracker.remove_project(&first.id).unwrap();
        assert_eq!(tracker.active_project_id().unwrap(), Some(second.id));
    }

    #[test]
    fn removing_last_project_clears_selection() {
        let mut tracker = tracker();
        let only = tracker.import_text(EXPORT, None).unwrap();
        tracker.remove_project(&only.id).unwrap();
        assert_eq!(tracker.active_project_id().unwrap(), None);
    }

    #[test]
    fn removing_unknown_project_fails() {
        let mut tracker = tracker();
        assert!(matches!(
            tracker.remove_project("project-nope"),
            Err(TrackerError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn complete_and_rename() {
        let mut tracker = tracker();
        let project = tracker.import_text(EXPORT, None).unwrap();

        let completed = tracker.complete_project(&project.id).unwrap();
        assert!(completed.is_completed());

        tracker.rename_project(&project.id, "Done").unwrap();
        let stored = tracker.get_project(&project.id).unwrap();
        assert_eq!(stored.name, "Done");
        assert!(stored.completed_at.is_some());
    }

    #[test]
    fn clear_active_keeps_projects() {
        let mut tracker = tracker();
        tracker.import_text(EXPORT, None).unwrap();
        tracker.clear_active().unwrap();
        assert!(tracker.active_project().unwrap().is_none());
        assert_eq!(tracker.projects().unwrap().len(), 1);
    }

    #[test]
    fn restore_project_keeps_id_and_activates() {
        let mut tracker = tracker();
        let mut project = BuildProject::new("Backup", parse_material_list(EXPORT).unwrap());
        project.id = "project-restored".to_string();
        tracker.restore_project(&project).unwrap();

        assert_eq!(
            tracker.active_project().unwrap(),
            Some(project)
        );
    }
}

mod collection_tests {
    use super::*;

    fn imported() -> (ProjectTracker<MemoryProjectStore>, BuildProject) {
        let mut tracker = tracker();
        let project = tracker.import_text(EXPORT, None).unwrap();
        (tracker, project)
    }

    #[test]
    fn parsed_quantities() {
        let (_, project) = imported();
        let concrete = &project.material_list.items[0];
        assert_eq!(concrete.missing, 1600);
        assert_eq!(concrete.collected, 0);
        let lantern = &project.material_list.items[1];
        assert_eq!(lantern.missing, 10);
        assert_eq!(lantern.collected, 14);
    }

    #[test]
    fn collect_item_is_persisted() {
        let (mut tracker, project) = imported();
        let item_id = project.material_list.items[0].id.clone();

        let item = tracker.collect_item(&item_id, Some(64)).unwrap();
        assert_eq!(item.collected, 64);
        assert_eq!(item.missing, 1800 - 64 - 200);

        let stored = tracker.get_project(&project.id).unwrap();
        assert_eq!(stored.material_list.items[0], item);
    }

    #[test]
    fn collect_item_defaults_to_missing() {
        let (mut tracker, project) = imported();
        let item_id = project.material_list.items[1].id.clone();
        let item = tracker.collect_item(&item_id, None).unwrap();
        assert_eq!(item.collected, 24);
        assert_eq!(item.missing, 0);
    }

    #[test]
    fn reset_item_restores_baseline() {
        let (mut tracker, project) = imported();
        let item_id = project.material_list.items[1].id.clone();
        let item = tracker.reset_item(&item_id).unwrap();
        assert_eq!(item.collected, 0);
        assert_eq!(item.missing, 24);
    }

    #[test]
    fn hide_and_unhide() {
        let (mut tracker, project) = imported();
        let item_id = project.material_list.items[0].id.clone();
        assert!(tracker.set_item_hidden(&item_id, true).unwrap().hidden);
        assert!(tracker.get_project(&project.id).unwrap().material_list.items[0].hidden);
        assert!(!tracker.set_item_hidden(&item_id, false).unwrap().hidden);
    }

    #[test]
    fn unknown_item_fails() {
        let (mut tracker, _) = imported();
        let err = tracker.collect_item("item-404", None).unwrap_err();
        assert!(matches!(err, TrackerError::ItemNotFound(id) if id == "item-404"));
    }

    #[test]
    fn actions_require_active_project() {
        let mut tracker = tracker();
        assert!(matches!(
            tracker.collect_all(),
            Err(TrackerError::NoActiveProject)
        ));
        assert!(matches!(
            tracker.collect_item("item-5", None),
            Err(TrackerError::NoActiveProject)
        ));
        assert!(!tracker.is_all_collected().unwrap());
    }

    #[test]
    fn collect_all_then_reset_all() {
        let (mut tracker, project) = imported();
        let item_id = project.material_list.items[0].id.clone();
        tracker.set_item_hidden(&item_id, true).unwrap();

        tracker.collect_all().unwrap();
        assert!(tracker.is_all_collected().unwrap());

        let reset = tracker.reset_all().unwrap();
        assert!(!tracker.is_all_collected().unwrap());
        assert!(reset
            .material_list
            .items
            .iter()
            .all(|i| i.collected == 0 && !i.hidden));
    }

    #[test]
    fn actions_only_touch_active_project() {
        let mut tracker = tracker();
        let first = tracker.import_text(EXPORT, Some("First")).unwrap();
        tracker.import_text(EXPORT, Some("Second")).unwrap();

        tracker.collect_all().unwrap();
        let untouched = tracker.get_project(&first.id).unwrap();
        assert_eq!(untouched, first);
    }

    #[test]
    fn works_with_sqlite_store() {
        let mut tracker = ProjectTracker::new(SqliteProjectStore::open_in_memory().unwrap());
        let project = tracker.import_text(EXPORT, None).unwrap();
        let item_id = project.material_list.items[0].id.clone();

        tracker.collect_item(&item_id, Some(1728)).unwrap();
        let stored = tracker.active_project().unwrap().unwrap();
        assert_eq!(stored.material_list.items[0].collected, 1728);
        assert_eq!(stored.material_list.title, "Lighthouse");
    }
}
