pub type Username = String;

/// Monetary amounts are integers in minor currency units. The original
/// listing currency is not modeled; all auctions share one unit.
pub type Amount = u64;
