/// Identifier assigned by the backend on insert
pub type EntityId = i32;

/// Trait for every record the inventory API manages
///
/// Carries the per-record identifier plus the static names used by
/// the REST routes and the UI.
pub trait InventoryEntity {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record identifier
    fn id(&self) -> EntityId;

    /// Display name of the record
    fn name(&self) -> &str;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Collection segment of the REST route (e.g. "categorias")
    fn collection_name() -> &'static str;

    /// UI name, singular
    fn element_name() -> &'static str;

    /// UI name, plural
    fn list_name() -> &'static str;

    /// REST path of the collection
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
