//! Responders
//!
//! A responder is one completion call scoped to a role: a specialist for a
//! single domain, or the general responder that can handle any domain.
//! The role set is closed; instructions, toolset and model are looked up by
//! table from the role, so adding a domain never adds a new type.

use crate::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use rutobot_domain::{
    DomainLabel, Model, ModelRole, PromptTemplate, RoleModels, SharedContext, Toolset,
};

/// Role a responder plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderRole {
    Specialist(DomainLabel),
    General,
}

impl ResponderRole {
    /// Role serving `domain`; `General` maps to the general responder
    pub fn for_domain(domain: DomainLabel) -> Self {
        if domain.is_specialist() {
            ResponderRole::Specialist(domain)
        } else {
            ResponderRole::General
        }
    }

    pub fn domain(&self) -> DomainLabel {
        match self {
            ResponderRole::Specialist(domain) => *domain,
            ResponderRole::General => DomainLabel::General,
        }
    }

    pub fn model_role(&self) -> ModelRole {
        match self {
            ResponderRole::Specialist(_) => ModelRole::Specialist,
            ResponderRole::General => ModelRole::General,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    role: ResponderRole,
    model: Model,
}

impl Responder {
    pub fn new(role: ResponderRole, models: &RoleModels) -> Self {
        Self {
            model: models.get(role.model_role()).clone(),
            role,
        }
    }

    pub fn for_domain(domain: DomainLabel, models: &RoleModels) -> Self {
        Self::new(ResponderRole::for_domain(domain), models)
    }

    pub fn general(models: &RoleModels) -> Self {
        Self::new(ResponderRole::General, models)
    }

    pub fn role(&self) -> ResponderRole {
        self.role
    }

    pub fn domain(&self) -> DomainLabel {
        self.role.domain()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn toolset(&self) -> Toolset {
        self.domain().toolset()
    }

    /// Build the completion request for `query`
    pub fn request(&self, query: &str, context: &SharedContext) -> CompletionRequest {
        CompletionRequest::new(
            self.model.clone(),
            PromptTemplate::responder_system(self.domain()),
            PromptTemplate::responder_query(query, context),
        )
        .with_toolset(self.toolset())
    }

    pub async fn respond<G: CompletionGateway + ?Sized>(
        &self,
        gateway: &G,
        query: &str,
        context: &SharedContext,
    ) -> Result<String, GatewayError> {
        gateway.complete(self.request(query, context)).await
    }
}
