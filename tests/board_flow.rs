//! Board behavior against a mock activities API: load/rebuild, optimistic
//! sign-up with reconciliation, removal, and the failure paths.

use activity_board::board::{ActivityBoard, MessageKind, SELECT_PLACEHOLDER};
use activity_board::client::ActivitiesClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn board_for(server: &MockServer) -> ActivityBoard {
    ActivityBoard::new(ActivitiesClient::new(&server.uri()).unwrap())
}

fn chess_roster(participants: &[&str]) -> serde_json::Value {
    json!({
        "Chess": {
            "description": "d",
            "schedule": "s",
            "max_participants": 10,
            "participants": participants,
        }
    })
}

async fn mount_activities(server: &MockServer, body: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_renders_all_cards_and_placeholder_option() {
    let server = MockServer::start().await;
    mount_activities(
        &server,
        json!({
            "Art": { "description": "a", "schedule": "s", "max_participants": 5, "participants": [] },
            "Chess": { "description": "c", "schedule": "s", "max_participants": 10, "participants": ["a@x.com"] },
            "Drama": { "description": "d", "schedule": "s", "max_participants": 8, "participants": ["b@x.com", "c@x.com"] },
        }),
        1,
    )
    .await;

    let mut board = board_for(&server);
    board.load_activities().await;

    let view = board.view();
    assert!(!view.load_failed);
    assert_eq!(view.cards.len(), 3);
    assert_eq!(view.options.len(), 4);
    assert_eq!(view.options[0].label, SELECT_PLACEHOLDER);
    assert_eq!(view.options[0].value, "");
    assert_eq!(view.cards[1].name, "Chess");
    assert_eq!(view.cards[1].header, "Participants (1)");
    assert_eq!(view.options[3].label, "Drama (2)");
}

#[tokio::test]
async fn empty_fields_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut board = board_for(&server);

    board.sign_up("", "a@x.com").await;
    let msg = board.visible_message().unwrap();
    assert_eq!(msg.text, "Please select an activity.");
    assert_eq!(msg.kind, MessageKind::Error);

    board.sign_up("Chess", "   ").await;
    assert_eq!(board.visible_message().unwrap().text, "Please enter an email.");
}

#[tokio::test]
async fn successful_signup_reconciles_with_server_list() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess/signup"))
        .and(query_param("email", "b@y.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Signed up b@y.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The reload after sign-up sees the server's updated roster
    mount_activities(&server, chess_roster(&["a@x.com", "b@y.com"]), 1).await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.sign_up("Chess", "b@y.com").await;

    let msg = board.visible_message().unwrap();
    assert_eq!(msg.text, "Signed up b@y.com");
    assert_eq!(msg.kind, MessageKind::Success);

    let card = &board.view().cards[0];
    assert_eq!(card.participants, vec!["a@x.com", "b@y.com"]);
    assert_eq!(card.header, "Participants (2)");
    assert_eq!(board.view().options[1].label, "Chess (2)");
}

#[tokio::test]
async fn rejected_signup_shows_detail_verbatim_and_skips_reload() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess/signup"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "detail": "Student is already signed up" })),
        )
        .mount(&server)
        .await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.sign_up("Chess", "a@x.com").await;

    let msg = board.visible_message().unwrap();
    assert_eq!(msg.text, "Student is already signed up");
    assert_eq!(msg.kind, MessageKind::Error);

    // View untouched: still exactly the loaded roster
    assert_eq!(board.view().cards[0].participants, vec!["a@x.com"]);
    assert_eq!(board.view().cards[0].header, "Participants (1)");
}

#[tokio::test]
async fn removal_reconciles_and_drops_the_email() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;
    Mock::given(method("DELETE"))
        .and(path("/activities/Chess/participants"))
        .and(query_param("email", "a@x.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Removed a@x.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_activities(&server, chess_roster(&[]), 1).await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.remove_participant("Chess", "a@x.com").await;

    assert_eq!(board.visible_message().unwrap().text, "Removed a@x.com");
    let card = &board.view().cards[0];
    assert!(card.participants.is_empty());
    assert_eq!(card.header, "Participants (0)");
    assert_eq!(board.view().options[1].label, "Chess (0)");
}

#[tokio::test]
async fn rejected_removal_leaves_view_untouched() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;
    Mock::given(method("DELETE"))
        .and(path("/activities/Chess/participants"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Participant not found" })),
        )
        .mount(&server)
        .await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.remove_participant("Chess", "ghost@x.com").await;

    let msg = board.visible_message().unwrap();
    assert_eq!(msg.text, "Participant not found");
    assert_eq!(msg.kind, MessageKind::Error);
    assert_eq!(board.view().cards[0].participants, vec!["a@x.com"]);
}

#[tokio::test]
async fn failed_load_clears_prior_state() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut board = board_for(&server);
    board.load_activities().await;
    assert_eq!(board.view().cards.len(), 1);

    board.load_activities().await;
    let view = board.view();
    assert!(view.load_failed);
    assert!(view.cards.is_empty());
    assert!(view.options.is_empty());
}

#[tokio::test]
async fn malformed_success_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&[]), 1).await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    mount_activities(&server, chess_roster(&["a@x.com"]), 1).await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.sign_up("Chess", "a@x.com").await;

    let msg = board.visible_message().unwrap();
    assert_eq!(msg.text, "Signed up successfully!");
    assert_eq!(msg.kind, MessageKind::Success);
    assert_eq!(board.view().cards[0].participants, vec!["a@x.com"]);
}

#[tokio::test]
async fn activity_names_are_percent_encoded() {
    let server = MockServer::start().await;
    mount_activities(&server, chess_roster(&[]), 1).await;
    Mock::given(method("POST"))
        .and(path("/activities/Chess%20Club/signup"))
        .and(query_param("email", "a+b@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    mount_activities(&server, chess_roster(&[]), 1).await;

    let mut board = board_for(&server);
    board.load_activities().await;
    board.sign_up("Chess Club", "a+b@x.com").await;

    assert_eq!(board.visible_message().unwrap().text, "ok");
}

#[tokio::test]
async fn unreachable_server_shows_generic_errors() {
    // Nothing listens here
    let mut board = ActivityBoard::new(ActivitiesClient::new("http://127.0.0.1:1").unwrap());

    board.load_activities().await;
    assert!(board.view().load_failed);

    board.sign_up("Chess", "a@x.com").await;
    assert_eq!(
        board.visible_message().unwrap().text,
        "An error occurred while signing up."
    );

    board.remove_participant("Chess", "a@x.com").await;
    assert_eq!(
        board.visible_message().unwrap().text,
        "An error occurred while removing participant."
    );
}
