//! Order id generators.

use uuid::Uuid;

/// A random 128-bit id as 32 lowercase hex characters.
pub fn random_order_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Ids of the form `{prefix}_1`, `{prefix}_2`, ...
pub fn sequential_ids(prefix: impl Into<String>) -> impl FnMut() -> String + Send + 'static {
    let prefix = prefix.into();
    let mut counter: u64 = 0;
    move || {
        counter += 1;
        format!("{}_{}", prefix, counter)
    }
}
