use super::*;

fn summary() -> EffectSummary {
    EffectSummary {
        skill_name: "Aura".to_owned(),
        source: "2D Editor".to_owned(),
        layer_count: 1,
        element_count: 12,
        line_count: 13,
        active_modes: vec!["Rotate Mode".to_owned()],
        optimized: false,
        generated_at: "2024-05-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn payload_is_a_single_embed() {
    let body = payload(&summary());
    let embeds = body["embeds"].as_array().unwrap();
    assert_eq!(embeds.len(), 1);
    assert_eq!(embeds[0]["color"], 0x00d4ff);
    assert_eq!(embeds[0]["timestamp"], "2024-05-01T10:00:00Z");
    assert_eq!(embeds[0]["fields"][0]["value"], "Aura");
    assert_eq!(embeds[0]["fields"][3]["value"], "Rotate Mode");
}

#[test]
fn blank_env_value_disables_notifications() {
    assert_eq!(NotifyConfig::from_env_value(Some(String::new())).endpoint, None);
    assert_eq!(NotifyConfig::from_env_value(None), NotifyConfig::default());
    assert_eq!(
        NotifyConfig::from_env_value(Some("https://hooks.test/x".to_owned())).endpoint,
        Some("https://hooks.test/x".to_owned())
    );
    assert_eq!(NotifyConfig::default().timeout, WEBHOOK_TIMEOUT);
}

#[cfg(feature = "network")]
#[tokio::test]
async fn no_endpoint_is_a_no_op() {
    assert!(dispatch(&NotifyConfig::default(), summary()).is_none());
}

#[cfg(feature = "network")]
#[tokio::test]
async fn unreachable_endpoint_is_swallowed() {
    let config = NotifyConfig {
        timeout: std::time::Duration::from_secs(2),
        ..NotifyConfig::default()
    }
    .with_endpoint("http://127.0.0.1:9/hook");
    let handle = dispatch(&config, summary()).unwrap();
    handle.await.unwrap();
}

#[cfg(feature = "network")]
#[test]
fn dispatch_outside_a_runtime_is_skipped() {
    let config = NotifyConfig::default().with_endpoint("http://127.0.0.1:9/hook");
    assert!(dispatch(&config, summary()).is_none());
}
