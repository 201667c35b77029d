//! Client-side navigation control: guards and the route table

pub mod guards;
pub mod table;

pub use guards::{AuthGuard, GuardDecision, Redirect, RoleGuard, RouteGuard};
pub use table::{Navigation, RouteAccess, RouteEntry, RouteTable};
