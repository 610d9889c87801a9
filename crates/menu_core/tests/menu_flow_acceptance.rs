use menu_core::ViewController;
use shared::{
    domain::Course,
    protocol::{Tab, UserAction, ViewSnapshot},
};

fn add_item(controller: &mut ViewController, name: &str, course: Course, price: &str) {
    controller.apply(UserAction::SetName { value: name.into() });
    controller.apply(UserAction::SetCourse {
        course: Some(course),
    });
    controller.apply(UserAction::SetDescription {
        value: format!("{name} description"),
    });
    controller.apply(UserAction::SetPrice {
        value: price.into(),
    });
    controller.apply(UserAction::SubmitAddForm);
}

#[test]
fn three_courses_show_matching_averages_and_filter_results() {
    let mut controller = ViewController::new();

    controller.apply(UserAction::SelectTab { tab: Tab::Add });
    add_item(&mut controller, "Bruschetta", Course::Starter, "10");
    add_item(&mut controller, "Risotto", Course::Main, "20");
    add_item(&mut controller, "Tiramisu", Course::Dessert, "30");

    controller.apply(UserAction::SelectTab { tab: Tab::Home });
    let home = controller.snapshot();
    assert_eq!(home.total_items, 3);
    let averages: Vec<(Course, f64, usize)> = home
        .averages
        .iter()
        .map(|avg| (avg.course, avg.average, avg.count))
        .collect();
    assert_eq!(
        averages,
        vec![
            (Course::Starter, 10.0, 1),
            (Course::Main, 20.0, 1),
            (Course::Dessert, 30.0, 1),
        ]
    );

    controller.apply(UserAction::SelectTab { tab: Tab::Filter });
    controller.apply(UserAction::SetFilterCourse {
        course: Some(Course::Main),
    });
    let filter = controller.snapshot();
    assert_eq!(filter.active_tab, Tab::Filter);
    assert_eq!(filter.filtered_items.len(), 1);
    assert_eq!(filter.filtered_items[0].name, "Risotto");
}

#[test]
fn snapshot_survives_json_round_trip_for_renderers() {
    let mut controller = ViewController::new();
    add_item(&mut controller, "Soup", Course::Starter, "42.5");
    add_item(&mut controller, "Bad", Course::Main, "abc");

    let snapshot = controller.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let decoded: ViewSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");

    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.total_items, 1);
    assert_eq!(decoded.form.name, "Bad");
    assert!(decoded.notice.is_some());
}
