mod common;

use booking_client::mock::MockApi;
use booking_core::models::booking::BookingStatus;
use booking_ui::{
    mock::MockPrompt,
    shell::{App, Command, Flow, Screen},
    views::{Field, FormMode},
    Route,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use common::{booking, into_api, into_prompt, resources};

#[rstest]
#[case("go /resources", Command::Go(Route::Resources))]
#[case("filter all", Command::Filter(None))]
#[case("filter pending", Command::Filter(Some(BookingStatus::Pending)))]
#[case("cancel 4", Command::Cancel(4))]
#[case("EDIT 4", Command::Edit(4))]
#[case("date 2026-01-29", Command::FilterDate("2026-01-29".to_string()))]
#[case("date clear", Command::FilterDate(String::new()))]
#[case("search", Command::Search(String::new()))]
#[case("search Room A", Command::Search("Room A".to_string()))]
#[case("set name Jane Doe", Command::Set(Field::CustomerName, "Jane Doe".to_string()))]
#[case("set notes", Command::Set(Field::Notes, String::new()))]
#[case("  submit ", Command::Submit)]
#[case("exit", Command::Quit)]
fn test_parse_command(#[case] line: &str, #[case] expected: Command) {
    assert_eq!(line.parse::<Command>().unwrap(), expected);
}

#[rstest]
#[case("fly away")]
#[case("cancel x")]
#[case("filter archived")]
#[case("set colour red")]
#[case("go /nowhere")]
fn test_parse_command_rejects(#[case] line: &str) {
    assert!(line.parse::<Command>().is_err());
}

fn api_for_list() -> MockApi {
    let mut api = MockApi::new();
    api.expect_list_bookings()
        .returning(|_| Ok(vec![booking(4, 1, BookingStatus::Confirmed)]));
    api.expect_list_resources().returning(|_| Ok(resources()));
    api
}

#[tokio::test]
async fn test_starts_on_booking_list() {
    let app = App::new(into_api(api_for_list()), into_prompt(MockPrompt::new())).await;

    assert_eq!(app.route(), Route::Bookings);
    assert!(matches!(app.screen(), Screen::Bookings(_)));
    assert!(app.render().starts_with("[/]\n== Bookings =="));
}

#[tokio::test]
async fn test_edit_navigates_to_loaded_form() {
    let mut api = api_for_list();
    api.expect_get_booking()
        .withf(|id| *id == 4)
        .times(1)
        .returning(|id| Ok(booking(id, 1, BookingStatus::Confirmed)));
    let mut app = App::new(into_api(api), into_prompt(MockPrompt::new())).await;

    let flow = app.handle(Command::Edit(4)).await.unwrap();

    assert_eq!(flow, Flow::Continue);
    assert_eq!(app.route(), Route::EditBooking(4));
    match app.screen() {
        Screen::Form(form) => {
            assert_eq!(form.mode(), FormMode::Edit(4));
            assert_eq!(form.data().customer_name, "Test User");
        }
        _ => panic!("expected the booking form"),
    }
}

#[tokio::test]
async fn test_screen_specific_commands_are_rejected_elsewhere() {
    let mut app = App::new(into_api(api_for_list()), into_prompt(MockPrompt::new())).await;

    assert!(app.handle(Command::Submit).await.is_err());
    assert!(app.handle(Command::Search("Room".to_string())).await.is_err());
    // the modal is closed, so the date filter has nothing to act on
    assert!(app.handle(Command::FilterDate("2026-01-29".to_string())).await.is_err());
}

#[tokio::test]
async fn test_notifications_open_from_booking_list() {
    let mut api = api_for_list();
    api.expect_list_notifications().times(1).returning(|| Ok(vec![]));
    let mut app = App::new(into_api(api), into_prompt(MockPrompt::new())).await;

    app.handle(Command::OpenNotifications).await.unwrap();
    app.handle(Command::FilterDate("2026-01-29".to_string())).await.unwrap();

    let rendered = app.render();
    assert!(rendered.contains("== Notifications =="));
    assert!(rendered.contains("Start date filter: 2026-01-29"));

    app.handle(Command::CloseNotifications).await.unwrap();
    assert!(!app.render().contains("== Notifications =="));
}

#[tokio::test]
async fn test_quit() {
    let mut app = App::new(into_api(api_for_list()), into_prompt(MockPrompt::new())).await;

    assert_eq!(app.handle(Command::Quit).await.unwrap(), Flow::Quit);
}
