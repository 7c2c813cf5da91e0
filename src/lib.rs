//! Authorization and privacy-policy engine for a multi-role property
//! marketplace (buyers, sellers, agents, admins).
//!
//! The engine derives a user's access level from their role and
//! completed identity verifications, resolves the permissions and
//! resource limits that level grants, and decides cross-user visibility
//! of contact details and profiles. It is a pure decision library:
//! callers own persistence, transport, and the verification workflow,
//! and pass in immutable snapshots per call.

pub mod access;
