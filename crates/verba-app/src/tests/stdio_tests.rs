use std::time::Duration;

use serde_json::Value;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::memory_state;
use crate::controller::AppController;
use crate::io::serve_lines;

async fn serve(input: &str) -> Vec<Value> {
    let controller = AppController::new(memory_state(), 8);
    let _tasks = controller.spawn_tasks(false);

    let mut output = Vec::new();
    timeout(
        Duration::from_secs(2),
        serve_lines(
            input.as_bytes(),
            &mut output,
            controller.client(),
            CancellationToken::new(),
        ),
    )
    .await
    .expect("timed out")
    .unwrap();
    controller.shutdown();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_one_response_per_request_line() {
    let responses = serve(concat!(
        r#"{"type":"translate","text":"aqua"}"#,
        "\n\n",
        r#"{"type":"saveVocabularyItem","item":{"word":"aqua","definition":"water"}}"#,
        "\n",
        r#"{"type":"loadVocabulary"}"#,
        "\n",
    ))
    .await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["primaryTranslation"], "water");
    assert_eq!(responses[1]["success"], true);
    assert_eq!(responses[2]["data"][0]["word"], "aqua");
}

#[tokio::test]
async fn test_malformed_line_answers_with_error() {
    let responses = serve("{\"type\":\"deleteEverything\"}\nnot json\n").await;

    assert_eq!(responses.len(), 2);
    for response in responses {
        assert!(
            response["error"]
                .as_str()
                .unwrap()
                .starts_with("Malformed request")
        );
    }
}
