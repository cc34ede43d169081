use async_trait::async_trait;
use mockall::mock;
use mxy_runtime::{ApplicationIdentity, ApplicationRuntime, RuntimeError, RuntimeResult, ServerRuntime};

use mxy_graph_examples::{launch, APPLICATION};

mock! {
    pub Runtime {}

    #[async_trait]
    impl ApplicationRuntime for Runtime {
        async fn start(&self, identity: &ApplicationIdentity, args: Vec<String>) -> RuntimeResult<()>;
    }
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_declared_identity() {
    assert_eq!(APPLICATION.name, "graph-examples");
    assert_eq!(APPLICATION.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_launch_forwards_empty_arguments() {
    let mut runtime = MockRuntime::new();
    runtime
        .expect_start()
        .withf(|identity, args| *identity == APPLICATION && args.is_empty())
        .times(1)
        .returning(|_, _| Ok(()));

    launch(&runtime, Vec::new()).await.expect("launch should succeed");
}

#[tokio::test]
async fn test_launch_forwards_arguments_unmodified() {
    let mut runtime = MockRuntime::new();
    runtime
        .expect_start()
        .withf(|identity, args| {
            *identity == APPLICATION && *args == vec!["--foo=1".to_string(), "bar".to_string()]
        })
        .times(1)
        .returning(|_, _| Ok(()));

    launch(&runtime, args(&["--foo=1", "bar"])).await.expect("launch should succeed");
}

#[tokio::test]
async fn test_launch_does_not_interpret_arguments() {
    let raw = args(&["--", "--=x", "", "  spaced  "]);
    let expected = raw.clone();

    let mut runtime = MockRuntime::new();
    runtime
        .expect_start()
        .withf(move |_, args| *args == expected)
        .times(1)
        .returning(|_, _| Ok(()));

    launch(&runtime, raw).await.expect("launch should succeed");
}

#[tokio::test]
async fn test_launch_propagates_runtime_error() {
    let mut runtime = MockRuntime::new();
    runtime
        .expect_start()
        .times(1)
        .returning(|_, _| Err(RuntimeError::InternalError("startup failed".to_string())));

    let err = launch(&runtime, Vec::new()).await.unwrap_err();
    assert!(matches!(err, RuntimeError::InternalError(ref msg) if msg == "startup failed"));
}

#[tokio::test]
async fn test_launch_with_server_runtime_without_web_server() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = ServerRuntime::with_config_dir(dir.path());

    launch(&runtime, args(&["--server.enabled=false"]))
        .await
        .expect("startup without a web server should succeed");
}
