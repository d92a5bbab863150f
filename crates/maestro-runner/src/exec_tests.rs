use super::*;

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn test_run_echo() {
    let result = run("sh", &sh("echo hello"), None, None).await.unwrap();
    assert_eq!(result.stdout, "hello");
    assert_eq!(result.stderr, "");
    assert_eq!(result.exit_code, 0);
}

#[tokio::test]
async fn test_output_is_trimmed() {
    let result = run("sh", &sh("echo; echo '  padded  '; echo"), None, None).await.unwrap();
    assert_eq!(result.stdout, "padded");
}

#[tokio::test]
async fn test_stderr_captured_on_success() {
    let result = run("sh", &sh("echo warning >&2"), None, None).await.unwrap();
    assert_eq!(result.stderr, "warning");
}

#[tokio::test]
async fn test_failure_prefers_stderr() {
    let err = run("sh", &sh("echo out; echo err >&2; exit 3"), None, Some("/tmp/debug"))
        .await
        .unwrap_err();
    match err {
        RunnerError::CommandFailed {
            exit_code,
            message,
            debug_path,
        } => {
            assert_eq!(exit_code, 3);
            assert_eq!(message, "err");
            assert_eq!(debug_path.as_deref(), Some("/tmp/debug"));
        }
        e => panic!("Expected CommandFailed, got {:?}", e),
    }
}

#[tokio::test]
async fn test_failure_falls_back_to_stdout() {
    let err = run("sh", &sh("echo only stdout; exit 1"), None, None).await.unwrap_err();
    match err {
        RunnerError::CommandFailed { message, .. } => assert_eq!(message, "only stdout"),
        e => panic!("Expected CommandFailed, got {:?}", e),
    }
}

#[tokio::test]
async fn test_failure_without_output() {
    let err = run("sh", &sh("exit 4"), None, None).await.unwrap_err();
    match err {
        RunnerError::CommandFailed { exit_code, message, .. } => {
            assert_eq!(exit_code, 4);
            assert_eq!(message, "Command exited with code 4");
        }
        e => panic!("Expected CommandFailed, got {:?}", e),
    }
}

#[tokio::test]
async fn test_timeout() {
    let result = run("sh", &sh("sleep 10"), Some(Duration::from_millis(100)), None).await;
    match result {
        Err(RunnerError::Timeout(_)) => {}
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_spawn_failure() {
    let result = run("/nonexistent/maestro-binary", &[], None, None).await;
    assert!(matches!(result, Err(RunnerError::Spawn(_))));
}
