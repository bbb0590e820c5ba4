// Database row types (sqlx FromRow). Domain types live with their feature
// modules; these structs mirror table shapes only. The original app's
// lazily-registered model singletons are replaced by these structs plus a
// pool built once at startup and threaded through AppState.

pub mod assessment;
pub mod plan;
pub mod tracker;
pub mod user;
