use super::{AttributeMap, Filters, ResourceKind};
use crate::core::Result;

/// Read/write access to one cloud deployment.
///
/// Implementations own transport, authentication and retries. Errors are
/// returned to the caller unmodified; nothing in this crate retries them.
pub trait CloudClient {
    /// Look up a single resource by id, falling back to its name.
    fn find_resource(&self, kind: ResourceKind, name_or_id: &str) -> Result<AttributeMap>;

    /// List resources whose attributes equal every filter value.
    fn list_resources(&self, kind: ResourceKind, filters: &Filters) -> Result<Vec<AttributeMap>>;

    /// Create a resource from `body`, returning the new id.
    fn create_resource(&mut self, kind: ResourceKind, body: AttributeMap) -> Result<String>;
}

impl<C: CloudClient + ?Sized> CloudClient for Box<C> {
    fn find_resource(&self, kind: ResourceKind, name_or_id: &str) -> Result<AttributeMap> {
        (**self).find_resource(kind, name_or_id)
    }

    fn list_resources(&self, kind: ResourceKind, filters: &Filters) -> Result<Vec<AttributeMap>> {
        (**self).list_resources(kind, filters)
    }

    fn create_resource(&mut self, kind: ResourceKind, body: AttributeMap) -> Result<String> {
        (**self).create_resource(kind, body)
    }
}
