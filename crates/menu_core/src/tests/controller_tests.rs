use super::*;
use shared::{domain::FormField, error::ErrorCode, protocol::NoticeKind};

fn fill_form(controller: &mut ViewController, name: &str, course: Course, price: &str) {
    controller.set_name(name);
    controller.set_course(Some(course));
    controller.set_description(format!("{name} of the day"));
    controller.set_price(price);
}

#[test]
fn starts_on_home_with_empty_state() {
    let controller = ViewController::new();
    assert_eq!(controller.active_tab(), Tab::Home);
    assert!(controller.form().is_empty());
    assert_eq!(controller.filter_course(), None);
    assert!(controller.notice().is_none());
    assert_eq!(controller.total_items(), 0);
}

#[test]
fn tab_selection_never_touches_the_store() {
    let mut controller = ViewController::new();
    fill_form(&mut controller, "Soup", Course::Starter, "40");
    controller.submit_add_form().expect("add");

    for tab in [Tab::Add, Tab::Filter, Tab::Home, Tab::Filter] {
        controller.select_tab(tab);
        assert_eq!(controller.active_tab(), tab);
        assert_eq!(controller.total_items(), 1);
    }
}

#[test]
fn successful_submit_clears_form_and_posts_success() {
    let mut controller = ViewController::new();
    fill_form(&mut controller, "Steak", Course::Main, "189.5");

    let item = controller.submit_add_form().expect("add");

    assert_eq!(item.name, "Steak");
    assert_eq!(controller.total_items(), 1);
    assert!(controller.form().is_empty());
    let notice = controller.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, ADDED_MESSAGE);
}

#[test]
fn rejected_submit_keeps_fields_for_correction() {
    let mut controller = ViewController::new();
    fill_form(&mut controller, "Steak", Course::Main, "-5");
    let form_before = controller.form().clone();

    let err = controller.submit_add_form().expect_err("invalid price");

    assert_eq!(err, ValidationError::InvalidPrice("-5".to_string()));
    assert_eq!(controller.form(), &form_before);
    assert_eq!(controller.total_items(), 0);
    let notice = controller.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.code, Some(ErrorCode::InvalidPrice));
}

#[test]
fn submit_without_course_reports_missing_field() {
    let mut controller = ViewController::new();
    controller.set_name("Pie");
    controller.set_description("Apple pie");
    controller.set_price("55");

    let err = controller.submit_add_form().expect_err("missing course");
    assert_eq!(err, ValidationError::MissingField(FormField::Course));
    assert_eq!(controller.form().name, "Pie");
    assert_eq!(
        controller.notice().and_then(|notice| notice.code),
        Some(ErrorCode::MissingField)
    );
}

#[test]
fn delete_reports_outcome_for_present_and_absent_ids() {
    let mut controller = ViewController::new();
    fill_form(&mut controller, "Soup", Course::Starter, "40");
    let soup = controller.submit_add_form().expect("add");

    assert!(controller.delete_item(soup.id));
    assert_eq!(controller.total_items(), 0);
    assert_eq!(
        controller.notice().map(|notice| notice.message.as_str()),
        Some(REMOVED_MESSAGE)
    );

    assert!(!controller.delete_item(soup.id));
    let notice = controller.notice().expect("notice");
    assert_eq!(notice.kind, NoticeKind::Deleted);
    assert_eq!(notice.message, ALREADY_REMOVED_MESSAGE);
}

#[test]
fn filtered_view_is_derived_from_current_items() {
    let mut controller = ViewController::new();
    controller.set_filter_course(Some(Course::Main));
    assert!(controller.filtered_items().is_empty());

    fill_form(&mut controller, "Steak", Course::Main, "180");
    controller.submit_add_form().expect("steak");
    fill_form(&mut controller, "Soup", Course::Starter, "40");
    controller.submit_add_form().expect("soup");

    let filtered = controller.filtered_items();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Steak");

    controller.set_filter_course(None);
    assert_eq!(controller.filtered_items().len(), 2);
}

#[test]
fn apply_dispatches_every_action() {
    let mut controller = ViewController::new();
    let actions = vec![
        UserAction::SelectTab { tab: Tab::Add },
        UserAction::SetName {
            value: "Malva".into(),
        },
        UserAction::SetCourse {
            course: Some(Course::Dessert),
        },
        UserAction::SetDescription {
            value: "Malva pudding".into(),
        },
        UserAction::SetPrice {
            value: "65".into(),
        },
        UserAction::SubmitAddForm,
    ];
    for action in actions {
        controller.apply(action);
    }

    assert_eq!(controller.active_tab(), Tab::Add);
    assert_eq!(controller.total_items(), 1);
    assert!(controller.notice().is_some());

    controller.apply(UserAction::DismissNotice);
    assert!(controller.notice().is_none());

    let id = controller.store().items()[0].id;
    controller.apply(UserAction::SetFilterCourse {
        course: Some(Course::Dessert),
    });
    assert_eq!(controller.filtered_items().len(), 1);

    controller.apply(UserAction::DeleteItem { id });
    assert_eq!(controller.total_items(), 0);
    assert!(controller.filtered_items().is_empty());
}

#[test]
fn snapshot_mirrors_controller_state() {
    let mut controller = ViewController::new();
    fill_form(&mut controller, "Steak", Course::Main, "20");
    controller.submit_add_form().expect("steak");
    controller.set_name("Draft");
    controller.set_filter_course(Some(Course::Starter));
    controller.select_tab(Tab::Filter);

    let snapshot = controller.snapshot();

    assert_eq!(snapshot.active_tab, Tab::Filter);
    assert_eq!(snapshot.total_items, 1);
    assert_eq!(snapshot.items.len(), 1);
    assert!(snapshot.filtered_items.is_empty());
    assert_eq!(snapshot.filter_course, Some(Course::Starter));
    assert_eq!(snapshot.form.name, "Draft");
    assert_eq!(snapshot.averages[1].average, 20.0);
    assert_eq!(
        snapshot.notice.map(|notice| notice.kind),
        Some(NoticeKind::Success)
    );
}

#[test]
fn wraps_an_existing_store() {
    let mut store = MenuStore::new();
    store
        .add("Koeksister", Some(Course::Dessert), "Syrup plait", "15")
        .expect("add");

    let controller = ViewController::with_store(store);

    assert_eq!(controller.total_items(), 1);
    assert_eq!(controller.active_tab(), Tab::Home);
    assert_eq!(controller.averages_by_course()[2].average, 15.0);
}
