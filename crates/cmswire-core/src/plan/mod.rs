//! Populate planning.
//!
//! Computes the dotted relation paths a read request should expand, walking
//! the declared model graph depth first. The walk is bounded by `max_depth`
//! and by an on-stack set of open types, so cyclic graphs terminate.
//! Running out of depth is not an error; the plan is just shorter.

#[cfg(test)]
mod tests;

use crate::{
    classify::{self, Role},
    model::{ContentModel, FieldModel},
    traits::Content,
};
use derive_more::{Deref, IntoIterator};
use std::collections::BTreeSet;
use tracing::debug;

///
/// PopulatePlan
///
/// Ordered, duplicate-free list of dotted field paths.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct PopulatePlan(Vec<String>);

impl PopulatePlan {
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Plan the populate paths of `T`.
#[must_use]
pub fn plan_for<T: Content>(max_depth: usize) -> PopulatePlan {
    plan_for_model(T::model(), max_depth)
}

/// Plan the populate paths of `model`.
#[must_use]
pub fn plan_for_model(model: &'static ContentModel, max_depth: usize) -> PopulatePlan {
    let mut planner = Planner {
        max_depth,
        open: BTreeSet::new(),
        seen: BTreeSet::new(),
        paths: Vec::new(),
    };
    planner.visit(model, "", 0);

    debug!(
        model = model.path,
        max_depth,
        paths = planner.paths.len(),
        "populate plan built"
    );

    PopulatePlan(planner.paths)
}

/// Encode a plan as `populate[i]=path` query pairs.
#[must_use]
pub fn populate_query(plan: &PopulatePlan) -> Vec<(String, String)> {
    plan.iter()
        .enumerate()
        .map(|(i, path)| (format!("populate[{i}]"), path.clone()))
        .collect()
}

///
/// Planner
///

struct Planner {
    max_depth: usize,
    open: BTreeSet<&'static str>,
    seen: BTreeSet<String>,
    paths: Vec<String>,
}

impl Planner {
    fn visit(&mut self, model: &'static ContentModel, prefix: &str, depth: usize) {
        if depth >= self.max_depth || !self.open.insert(model.path) {
            return;
        }

        for field in model.fields.iter().filter(|f| f.populate) {
            if !expands(field) {
                continue;
            }

            let path = if prefix.is_empty() {
                field.name.to_string()
            } else {
                format!("{prefix}.{}", field.name)
            };
            if self.seen.insert(path.clone()) {
                self.paths.push(path.clone());
            }

            for target in field.kind.targets() {
                self.visit(target, &path, depth + 1);
            }
        }

        self.open.remove(model.path);
    }
}

// Navigational fields always expand; opaque objects only when something
// navigational sits beneath them.
fn expands(field: &FieldModel) -> bool {
    let role = field.role();

    role.is_navigational()
        || (matches!(role.element(), Role::Object)
            && field
                .kind
                .targets()
                .into_iter()
                .any(classify::has_navigation))
}
