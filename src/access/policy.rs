use std::collections::{BTreeMap, BTreeSet};

use super::catalog::PermissionCatalog;
use super::domain::{AccessLevel, Limit, LimitName, Permission, Role, VerificationType};
use super::matrix::{
    standard_requirement_table, LimitMatrix, PermissionMatrix, PolicyBuildError,
};

/// Immutable bundle of the catalog, permission matrix, limit matrix, and
/// requirement table. Built once at startup and shared by reference (or
/// `Arc`) with every evaluator; holding it behind `Arc` is what makes
/// concurrent evaluation lock-free, since nothing here is ever written
/// after construction.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    catalog: PermissionCatalog,
    permissions: PermissionMatrix,
    limits: LimitMatrix,
    requirements: BTreeMap<Permission, BTreeSet<VerificationType>>,
}

impl AccessPolicy {
    /// The built-in platform policy. Fails only on authoring mistakes in
    /// the static tables, which should surface at startup rather than as
    /// silent mis-grants.
    pub fn standard() -> Result<Self, PolicyBuildError> {
        Self::from_parts(
            PermissionCatalog::standard(),
            PermissionMatrix::standard(),
            LimitMatrix::standard(),
            standard_requirement_table(),
        )
    }

    /// Assemble and validate a policy from explicit parts. Validation
    /// enforces: every grant and requirement-table key exists in the
    /// catalog, grant sets only grow along each role's ladder, and every
    /// catalog entry is granted somewhere.
    pub fn from_parts(
        catalog: PermissionCatalog,
        permissions: PermissionMatrix,
        limits: LimitMatrix,
        requirements: BTreeMap<Permission, BTreeSet<VerificationType>>,
    ) -> Result<Self, PolicyBuildError> {
        permissions.validate_against(&catalog)?;

        let referenced = permissions.referenced();
        if let Some(orphan) = catalog.all().find(|p| !referenced.contains(p)) {
            return Err(PolicyBuildError::UnreferencedPermission {
                permission: orphan.clone(),
            });
        }

        if let Some(unknown) = requirements.keys().find(|p| !catalog.contains(p)) {
            return Err(PolicyBuildError::RequirementOutsideCatalog {
                permission: unknown.clone(),
            });
        }

        Ok(Self {
            catalog,
            permissions,
            limits,
            requirements,
        })
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn grants_for(
        &self,
        role: Role,
        level: AccessLevel,
    ) -> Option<&BTreeSet<Permission>> {
        self.permissions.grants_for(role, level)
    }

    pub fn limits_for(
        &self,
        role: Role,
        level: AccessLevel,
    ) -> Option<&BTreeMap<LimitName, Limit>> {
        self.limits.limits_for(role, level)
    }

    pub fn requirements_for(
        &self,
        permission: &Permission,
    ) -> Option<&BTreeSet<VerificationType>> {
        self.requirements.get(permission)
    }
}
