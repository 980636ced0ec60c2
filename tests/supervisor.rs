//! Integration tests for player process supervision and shutdown.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod common;

use std::time::Duration;

use common::{FakeApi, FakeConnector, exited_player, peer_gone, remote_failure, spawn_player, unavailable};
use radiotray_mpris::{
    BridgeError,
    config::PlayerSettings,
    services::radiotray::ApiError,
    supervisor::{ProcessSupervisor, ShutdownOutcome},
};

mod start {
    use super::*;

    #[tokio::test]
    async fn running_player_is_detected() {
        let supervisor = spawn_player("sleep", &["5"]);

        assert!(supervisor.is_running().await);
        assert!(supervisor.process().id().await.is_some());
    }

    #[tokio::test]
    async fn autoplay_flag_is_appended() {
        let settings = PlayerSettings {
            executable: "sh".to_string(),
            args: vec!["-c".to_string(), "test \"$0\" = --play".to_string()],
            autoplay_flag: "--play".to_string(),
        };

        let supervisor = ProcessSupervisor::start(&settings, true).unwrap();
        let status = supervisor.process().wait().await.unwrap().unwrap();

        assert!(status.success());
    }

    #[tokio::test]
    async fn autoplay_flag_is_omitted_without_autoplay() {
        let settings = PlayerSettings {
            executable: "sh".to_string(),
            args: vec!["-c".to_string(), "test -z \"$0\" || test \"$0\" = sh".to_string()],
            autoplay_flag: "--play".to_string(),
        };

        let supervisor = ProcessSupervisor::start(&settings, false).unwrap();
        let status = supervisor.process().wait().await.unwrap().unwrap();

        assert!(status.success());
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let _guard = runtime.enter();

        let settings = PlayerSettings {
            executable: "/nonexistent/radiotray-ng".to_string(),
            ..PlayerSettings::default()
        };

        match ProcessSupervisor::start(&settings, false) {
            Err(error @ BridgeError::Spawn { .. }) => assert_eq!(error.exit_code(), 7),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn prepared_command_names_the_program_in_spawn_errors() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let _guard = runtime.enter();

        let command = tokio::process::Command::new("/nonexistent/radiotray-ng");

        match ProcessSupervisor::from_command(command) {
            Err(BridgeError::Spawn { executable, .. }) => {
                assert_eq!(executable, "/nonexistent/radiotray-ng");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn dropped_test_player_is_killed() {
        let supervisor = spawn_player("sleep", &["30"]);
        let pid = supervisor.process().id().await.unwrap();
        drop(supervisor);

        let stat = format!("/proc/{pid}/stat");
        for _ in 0..200 {
            match std::fs::read_to_string(&stat) {
                Err(_) => return,
                Ok(line) if line.contains(") Z ") => return,
                Ok(_) => tokio::time::sleep(Duration::from_millis(10)).await,
            }
        }
        panic!("sleep {pid} survived its handle");
    }
}

mod shutdown {
    use super::*;

    #[tokio::test]
    async fn quits_running_player_and_waits() {
        let supervisor = spawn_player("sleep", &["0.2"]);
        let connector = FakeConnector::new(FakeApi::default());

        let outcome = tokio::time::timeout(Duration::from_secs(10), supervisor.shutdown(&connector))
            .await
            .unwrap()
            .unwrap();

        assert!(matches!(outcome, ShutdownOutcome::Exited(Some(_))));
        assert_eq!(connector.connects(), 1);
        assert_eq!(connector.api.calls(), vec!["quit"]);
        assert!(!supervisor.is_running().await);
    }

    #[tokio::test]
    async fn exited_player_needs_no_quit() {
        let supervisor = exited_player().await;
        let connector = FakeConnector::new(FakeApi::default());

        let outcome = supervisor.shutdown(&connector).await.unwrap();

        assert_eq!(outcome, ShutdownOutcome::NotRunning);
        assert_eq!(connector.connects(), 0);
    }

    #[tokio::test]
    async fn detached_supervisor_needs_no_quit() {
        let supervisor = ProcessSupervisor::detached();
        let connector = FakeConnector::new(FakeApi::default());

        assert_eq!(
            supervisor.shutdown(&connector).await.unwrap(),
            ShutdownOutcome::NotRunning
        );
    }

    #[tokio::test]
    async fn missing_reply_to_quit_is_ignored() {
        let supervisor = spawn_player("sleep", &["0.2"]);
        let api = FakeApi::default();
        api.fail_quit_with(peer_gone);
        let connector = FakeConnector::new(api);

        let outcome = supervisor.shutdown(&connector).await.unwrap();

        assert!(matches!(outcome, ShutdownOutcome::Exited(_)));
    }

    #[tokio::test]
    async fn other_quit_failures_propagate() {
        let supervisor = spawn_player("sleep", &["5"]);
        let api = FakeApi::default();
        api.fail_quit_with(remote_failure);
        let connector = FakeConnector::new(api);

        let result = supervisor.shutdown(&connector).await;

        assert!(matches!(
            result,
            Err(BridgeError::Api(ApiError::Remote { .. }))
        ));
    }

    #[tokio::test]
    async fn connect_failure_propagates() {
        let supervisor = spawn_player("sleep", &["5"]);
        let connector = FakeConnector::failing(unavailable);

        let result = supervisor.shutdown(&connector).await;

        match result {
            Err(error @ BridgeError::Api(ApiError::ServiceUnavailable { attempts: 30 })) => {
                assert_eq!(error.exit_code(), 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
