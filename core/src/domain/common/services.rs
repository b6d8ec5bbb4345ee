use crate::domain::{
    analysis::ports::{ProductDatabasePort, VisionClassifierPort},
    knowledge::KnowledgeBase,
    rate_limit::{ports::RateLimitStore, services::FixedWindowLimiter},
};

/// Generic service aggregate wiring the knowledge base to the external
/// collaborator ports. Concrete adapters are chosen in
/// `application::create_service`; tests substitute mocks.
pub struct Service<PD, VC, RL>
where
    PD: ProductDatabasePort,
    VC: VisionClassifierPort,
    RL: RateLimitStore,
{
    pub(crate) knowledge_base: &'static KnowledgeBase,
    pub(crate) product_db: PD,
    pub(crate) vision_classifier: VC,
    pub(crate) vision_limiter: FixedWindowLimiter<RL>,
}

impl<PD, VC, RL> Service<PD, VC, RL>
where
    PD: ProductDatabasePort,
    VC: VisionClassifierPort,
    RL: RateLimitStore,
{
    pub fn new(
        knowledge_base: &'static KnowledgeBase,
        product_db: PD,
        vision_classifier: VC,
        vision_limiter: FixedWindowLimiter<RL>,
    ) -> Self {
        Self {
            knowledge_base,
            product_db,
            vision_classifier,
            vision_limiter,
        }
    }

    pub fn knowledge_base(&self) -> &'static KnowledgeBase {
        self.knowledge_base
    }
}
