use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
pub struct FeatureRequest {
    /// Description of the feature to implement
    pub feature_description: String,
    /// Type of project (web, api, mobile, etc.)
    #[serde(default = "default_project_type")]
    pub project_type: String,
    /// Complexity level (simple, medium, complex)
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

impl FeatureRequest {
    pub fn new(feature_description: impl Into<String>) -> Self {
        Self {
            feature_description: feature_description.into(),
            project_type: default_project_type(),
            complexity: default_complexity(),
        }
    }
}

pub fn default_project_type() -> String {
    "web".to_string()
}

pub fn default_complexity() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Phase {
    pub phase: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturePlan {
    pub feature: String,
    pub project_type: String,
    pub complexity: String,
    pub implementation_steps: Vec<Phase>,
    pub next_actions: Vec<String>,
}

const PHASES: &[(&str, [&str; 3])] = &[
    (
        "Requirements Analysis",
        [
            "Define functional requirements",
            "Identify non-functional requirements",
            "Map dependencies",
        ],
    ),
    (
        "Technical Design",
        [
            "Architecture planning",
            "Database schema (if needed)",
            "API design (if applicable)",
        ],
    ),
    (
        "Development",
        [
            "Set up development environment",
            "Implement core functionality",
            "Add error handling",
        ],
    ),
    (
        "Testing",
        ["Unit tests", "Integration tests", "User acceptance testing"],
    ),
    (
        "Deployment",
        ["Staging deployment", "Production deployment", "Monitoring setup"],
    ),
];

const NEXT_ACTIONS: [&str; 4] = [
    "Create Jira ticket with this plan",
    "Estimate effort and timeline",
    "Assign team members",
    "Begin requirements gathering",
];

/// Static plan skeleton. Inputs are echoed back, never interpreted.
pub fn plan_feature(req: FeatureRequest) -> FeaturePlan {
    FeaturePlan {
        feature: req.feature_description,
        project_type: req.project_type,
        complexity: req.complexity,
        implementation_steps: PHASES
            .iter()
            .map(|(phase, tasks)| Phase {
                phase: phase.to_string(),
                tasks: tasks.iter().map(|t| t.to_string()).collect(),
            })
            .collect(),
        next_actions: NEXT_ACTIONS.iter().map(|a| a.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_inputs() {
        let plan = plan_feature(FeatureRequest {
            feature_description: "Add login".to_string(),
            project_type: "api".to_string(),
            complexity: "complex".to_string(),
        });
        assert_eq!(plan.feature, "Add login");
        assert_eq!(plan.project_type, "api");
        assert_eq!(plan.complexity, "complex");
    }

    #[test]
    fn phases_come_in_fixed_order() {
        let plan = plan_feature(FeatureRequest::new("Add login"));
        let names: Vec<_> = plan.implementation_steps.iter().map(|p| p.phase.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Requirements Analysis",
                "Technical Design",
                "Development",
                "Testing",
                "Deployment"
            ]
        );
        assert!(plan.implementation_steps.iter().all(|p| p.tasks.len() == 3));
        assert_eq!(plan.next_actions.len(), 4);
    }

    #[test]
    fn defaults_apply_when_fields_missing() {
        let req: FeatureRequest =
            serde_json::from_value(serde_json::json!({ "feature_description": "X" })).unwrap();
        let plan = plan_feature(req);
        assert_eq!(plan.project_type, "web");
        assert_eq!(plan.complexity, "medium");
    }

    #[test]
    fn free_text_is_not_validated() {
        let plan = plan_feature(FeatureRequest {
            feature_description: String::new(),
            project_type: "embedded firmware".to_string(),
            complexity: "¯\\_(ツ)_/¯".to_string(),
        });
        assert_eq!(plan.project_type, "embedded firmware");
        assert_eq!(plan.complexity, "¯\\_(ツ)_/¯");
    }

    #[test]
    fn content_ignores_inputs() {
        let a = plan_feature(FeatureRequest::new("A"));
        let b = plan_feature(FeatureRequest::new("B"));
        assert_eq!(a.implementation_steps, b.implementation_steps);
        assert_eq!(a.next_actions, b.next_actions);
        assert_eq!(a, plan_feature(FeatureRequest::new("A")));
    }
}
