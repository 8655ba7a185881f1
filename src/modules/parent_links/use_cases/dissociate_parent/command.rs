use crate::shared::core::primitives::AssociationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DissociateParent {
    pub association_id: AssociationId,
    pub dissociated_at: i64,
}
