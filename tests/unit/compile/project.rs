use super::*;
use crate::scene::model::Element;
use serde_json::json;

fn ctx() -> ScriptContext {
    ScriptContext::new("2026-01-01T00:00:00Z", "https://example.invalid/community")
}

#[test]
fn each_session_becomes_its_own_skill() {
    let project = Project {
        name: "Demo".to_owned(),
        description: Some("two effects".to_owned()),
        sessions: vec![
            Session {
                name: "First".to_owned(),
                layers: vec![Layer::new("l", "Base").with_elements([Element::at("a", 1.0, 2.0)])],
                ..Session::default()
            },
            Session {
                name: "Second".to_owned(),
                settings: ScriptSettings {
                    skill_name: String::new(),
                    ..ScriptSettings::default()
                },
                layers: vec![Layer::new("l", "Top").with_elements([Element::at("b", 0.0, 0.0)])],
                ..Session::default()
            },
        ],
    };
    let text = compile_project(&project, &ctx()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "# AuraFX Multi-Effect Project");
    assert!(lines.contains(&"# Total Sessions: 2"));
    assert!(lines.contains(&"# │ Session 1: First"));
    assert!(lines.contains(&"MySkill:"));
    assert!(lines.contains(&"Effect_2:"));
    assert!(lines.contains(&"    # Layer 1: Base"));
    assert!(text.contains("@Origin{xoffset=1.0000;zoffset=2.0000;yoffset=0.0000}"));
    assert!(text.ends_with(RULE));
}

#[test]
fn recorded_actions_move_the_snapshot() {
    let session = Session {
        name: "Moved".to_owned(),
        layers: vec![Layer::new("l", "Base").with_elements([Element::at("a", 0.0, 0.0)])],
        action_records: vec![ActionRecord::moved(["a"], (2.0, 0.0, 1.0), 5)],
        ..Session::default()
    };
    let project = Project {
        name: "P".to_owned(),
        sessions: vec![session],
        ..Project::default()
    };
    let text = compile_project(&project, &ctx()).unwrap();
    assert!(text.contains("xoffset=2.0000;zoffset=0.0000;yoffset=1.0000"));
    assert!(!text.contains("delay"));
}

#[test]
fn hidden_and_empty_layers_are_left_out() {
    let mut hidden = Layer::new("h", "Hidden").with_elements([Element::at("a", 0.0, 0.0)]);
    hidden.visible = false;
    let project = Project {
        name: "P".to_owned(),
        sessions: vec![Session {
            layers: vec![hidden, Layer::new("e", "Empty")],
            ..Session::default()
        }],
        ..Project::default()
    };
    let text = compile_project(&project, &ctx()).unwrap();
    assert!(!text.contains("# Layer"));
    assert!(!text.contains("e:p{"));
}

#[test]
fn parses_editor_json() {
    let project = Project::from_json(
        &json!({
            "name": "From JSON",
            "sessions": [{
                "name": "S",
                "createdAt": "2025-06-01T10:00:00Z",
                "settings": { "skillName": "Spark" },
                "layers": [{ "name": "L", "elements": [{ "id": "a", "position": { "x": 1, "z": 1 } }] }]
            }]
        })
        .to_string(),
    )
    .unwrap();
    let text = compile_project(&project, &ctx()).unwrap();
    assert!(text.contains("# │ Created: 2025-06-01T10:00:00Z"));
    assert!(text.contains("Spark:\n  Skills:"));
}
