mod common;

use combined_table::cricinfo::{self, client::Cricinfo, PageFetcher};
use combined_table::error::TableError;
use common::{points_table_page, team_stat};
use httpmock::prelude::*;
use std::time::Duration;

const USER_AGENT: &str = "combined-table-test";

#[tokio::test]
async fn page_is_requested_with_user_agent() {
    let server = MockServer::start();
    let page = points_table_page(vec![team_stat("Brave", 8, 7, 1, "933/138.0", "850/149.0")]);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/women/points-table-standings")
            .header("user-agent", USER_AGENT);
        then.status(200)
            .header("Content-Type", "text/html")
            .body(page.clone());
    });

    let client = Cricinfo::new(USER_AGENT, Duration::from_secs(5)).unwrap();
    let sections = cricinfo::sections(&client, &server.url("/women/points-table-standings"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(sections["Brave"].won, 7);
    assert_eq!(sections["Brave"].bowling_overs, 149.0);
}

#[tokio::test]
async fn error_status_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/men/points-table-standings");
        then.status(500);
    });

    let client = Cricinfo::new(USER_AGENT, Duration::from_secs(5)).unwrap();
    let result = client.page(&server.url("/men/points-table-standings")).await;

    assert!(matches!(result, Err(TableError::Transport(_))));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = Cricinfo::new(USER_AGENT, Duration::from_millis(500)).unwrap();
    let result = client.page("http://127.0.0.1:1/points-table-standings").await;

    assert!(matches!(result, Err(TableError::Transport(_))));
}
