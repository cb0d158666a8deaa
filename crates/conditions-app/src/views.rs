//! The `views` use case: list configured views and their condition labels.

use conditions_domain::Policy;
use conditions_settings::ResolvedConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSummary {
    pub name: String,
    /// Label of the effective condition.
    pub condition: String,
    /// `true` when the view has no condition and falls back to the default.
    pub defaulted: bool,
}

/// Views in name order.
pub fn list_views(resolved: &ResolvedConfig) -> Vec<ViewSummary> {
    resolved
        .views
        .iter()
        .map(|(name, policy)| ViewSummary {
            name: name.clone(),
            condition: match policy {
                Some(policy) => policy.label().into_owned(),
                None => Policy::default().label().into_owned(),
            },
            defaulted: policy.is_none(),
        })
        .collect()
}

pub fn format_views(views: &[ViewSummary]) -> String {
    if views.is_empty() {
        return "No views configured.\n".to_string();
    }

    let width = views.iter().map(|v| v.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for view in views {
        out.push_str(&format!("{:<width$}  {}", view.name, view.condition));
        if view.defaulted {
            out.push_str(" (default)");
        }
        out.push('\n');
    }
    out
}
