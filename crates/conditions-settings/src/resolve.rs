use crate::model::{ConditionExpr, ConditionsConfigV1, Operation};
use anyhow::Context;
use conditions_domain::{ConditionPermission, Leaf, Policy, builder};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub parent_lookup_kwarg: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ResolvedConfig {
    /// Route parameter for nested-owner checks, when configured.
    pub parent_lookup_kwarg: Option<String>,
    /// Declared views and their condition; `None` means unconfigured.
    pub views: BTreeMap<String, Option<Policy>>,
}

impl ResolvedConfig {
    pub fn has_view(&self, view: &str) -> bool {
        self.views.contains_key(view)
    }

    /// Configured condition for a view, `None` when absent or undeclared.
    pub fn condition_for(&self, view: &str) -> Option<&Policy> {
        self.views.get(view).and_then(Option::as_ref)
    }

    pub fn permission_for(&self, view: &str) -> ConditionPermission {
        ConditionPermission::new(self.condition_for(view).cloned())
    }
}

pub fn resolve_config(
    cfg: ConditionsConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let parent_lookup_kwarg = overrides
        .parent_lookup_kwarg
        .or(cfg.parent_lookup_kwarg.clone())
        .filter(|k| !k.trim().is_empty());

    let mut resolver = Resolver::new(&cfg.conditions)?;
    for name in cfg.conditions.keys() {
        resolver
            .resolve_name(name)
            .with_context(|| format!("resolve condition definition {name}"))?;
    }

    let mut views = BTreeMap::new();
    for (view, vc) in cfg.views.iter() {
        let policy = match &vc.condition {
            Some(expr) => Some(
                resolver
                    .resolve(expr)
                    .with_context(|| format!("resolve condition for view {view}"))?,
            ),
            None => None,
        };
        debug!(
            view = view.as_str(),
            condition = policy.as_ref().map(|p| p.label().into_owned()).as_deref(),
            "resolved view condition"
        );
        views.insert(view.clone(), policy);
    }

    Ok(ResolvedConfig {
        parent_lookup_kwarg,
        views,
    })
}

/// Turns expressions into policies, sharing each named definition's descriptor
/// between every expression that references it.
struct Resolver<'a> {
    definitions: &'a BTreeMap<String, ConditionExpr>,
    resolved: BTreeMap<String, Policy>,
    in_progress: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(definitions: &'a BTreeMap<String, ConditionExpr>) -> anyhow::Result<Self> {
        for name in definitions.keys() {
            if Leaf::from_id(name).is_ok() || name == conditions_types::ids::COND_METHOD {
                anyhow::bail!("condition definition `{name}` shadows a builtin condition");
            }
        }
        Ok(Self {
            definitions,
            resolved: BTreeMap::new(),
            in_progress: Vec::new(),
        })
    }

    fn resolve(&mut self, expr: &ConditionExpr) -> anyhow::Result<Policy> {
        match expr {
            ConditionExpr::Name(name) => self.resolve_name(name),
            ConditionExpr::Operation(Operation::And(items)) => {
                let operands = self.resolve_all(items)?;
                Ok(builder::all(operands)?)
            }
            ConditionExpr::Operation(Operation::Or(items)) => {
                let operands = self.resolve_all(items)?;
                Ok(builder::any(operands)?)
            }
            ConditionExpr::Operation(Operation::Not(inner)) => {
                Ok(builder::not(self.resolve(inner)?))
            }
            ConditionExpr::Operation(Operation::Method(verb)) => {
                Ok(Leaf::method_equals(Some(verb.as_str()))?.into())
            }
        }
    }

    fn resolve_all(&mut self, items: &[ConditionExpr]) -> anyhow::Result<Vec<Policy>> {
        items.iter().map(|item| self.resolve(item)).collect()
    }

    fn resolve_name(&mut self, name: &str) -> anyhow::Result<Policy> {
        if let Some(policy) = self.resolved.get(name) {
            return Ok(policy.clone());
        }

        let Some(definition) = self.definitions.get(name) else {
            return Ok(Leaf::from_id(name)?.into());
        };

        if self.in_progress.iter().any(|n| n == name) {
            let mut chain = self.in_progress.join(" -> ");
            chain.push_str(" -> ");
            chain.push_str(name);
            anyhow::bail!("cyclic condition definition: {chain}");
        }

        self.in_progress.push(name.to_string());
        let policy = self
            .resolve(definition)
            .with_context(|| format!("in condition definition {name}"));
        self.in_progress.pop();

        let policy = policy?;
        self.resolved.insert(name.to_string(), policy.clone());
        Ok(policy)
    }
}
