use crate::domain::model::{Dependency, ScopeSummary};

impl ScopeSummary {
    pub fn from_dependencies(dependencies: &[Dependency]) -> Self {
        let mut summary = ScopeSummary::default();
        for dep in dependencies {
            *summary.scopes.entry(dep.scope.clone()).or_insert(0) += 1;
        }
        summary
    }

    pub fn count(&self, scope: &str) -> usize {
        self.scopes.get(scope).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.scopes.values().sum()
    }
}
