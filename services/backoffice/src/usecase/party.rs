use chrono::{DateTime, Utc};
use uuid::Uuid;

use bistro_domain::pagination::PageRequest;
use bistro_domain::party::PartyKind;
use bistro_domain::validate::{is_valid_email, is_valid_gstin, is_valid_phone, normalize_email};

use crate::domain::repository::PartyRepository;
use crate::domain::types::{Party, PartyInput};
use crate::error::BackofficeError;

/// Validate `input` and build the stored record.
fn build_party(
    id: Uuid,
    input: PartyInput,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<Party, BackofficeError> {
    let name = input
        .name
        .ok_or_else(|| BackofficeError::validation("name is required"))?;

    let email = input.email.map(|e| normalize_email(&e));
    if let Some(email) = email.as_deref() {
        if !is_valid_email(email) {
            return Err(BackofficeError::validation("invalid email format"));
        }
    }
    if let Some(phone) = input.phone_number.as_deref() {
        if !is_valid_phone(phone) {
            return Err(BackofficeError::validation(
                "phone_number must be exactly 10 digits",
            ));
        }
    }
    let gstin = input.gstin.map(|g| g.to_uppercase());
    if let Some(gstin) = gstin.as_deref() {
        if !is_valid_gstin(gstin) {
            return Err(BackofficeError::validation("invalid GSTIN"));
        }
    }

    Ok(Party {
        id,
        kind: input.kind,
        name,
        phone_number: input.phone_number,
        email,
        category: input.category,
        gstin,
        bill_type: input.bill_type,
        billing_term: input.billing_term,
        date_of_birth: input.date_of_birth,
        business_name: input.business_name,
        billing_address: input.billing_address,
        billing_state: input.billing_state,
        billing_pincode: input.billing_pincode,
        delivery_address: input.delivery_address,
        delivery_state: input.delivery_state,
        delivery_pincode: input.delivery_pincode,
        whatsapp_alerts: input.whatsapp_alerts.unwrap_or(true),
        created_at,
        updated_at: now,
    })
}

// ── ListParties ──────────────────────────────────────────────────────────────

pub struct ListPartiesUseCase<R: PartyRepository> {
    pub repo: R,
}

impl<R: PartyRepository> ListPartiesUseCase<R> {
    pub async fn execute(
        &self,
        kind: Option<PartyKind>,
        page: PageRequest,
    ) -> Result<Vec<Party>, BackofficeError> {
        self.repo.list(kind, page).await
    }
}

// ── GetParty ─────────────────────────────────────────────────────────────────

pub struct GetPartyUseCase<R: PartyRepository> {
    pub repo: R,
}

impl<R: PartyRepository> GetPartyUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Party, BackofficeError> {
        self.repo
            .get(id)
            .await?
            .ok_or(BackofficeError::PartyNotFound)
    }
}

// ── CreateParty ──────────────────────────────────────────────────────────────

pub struct CreatePartyUseCase<R: PartyRepository> {
    pub repo: R,
}

impl<R: PartyRepository> CreatePartyUseCase<R> {
    pub async fn execute(&self, input: PartyInput) -> Result<Party, BackofficeError> {
        let now = Utc::now();
        let party = build_party(Uuid::now_v7(), input, now, now)?;
        self.repo.create(&party).await?;
        Ok(party)
    }
}

// ── UpdateParty ──────────────────────────────────────────────────────────────

/// Full replacement: absent optional fields are cleared.
pub struct UpdatePartyUseCase<R: PartyRepository> {
    pub repo: R,
}

impl<R: PartyRepository> UpdatePartyUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: PartyInput) -> Result<Party, BackofficeError> {
        let existing = self
            .repo
            .get(id)
            .await?
            .ok_or(BackofficeError::PartyNotFound)?;
        let party = build_party(id, input, existing.created_at, Utc::now())?;
        if !self.repo.update(&party).await? {
            return Err(BackofficeError::PartyNotFound);
        }
        Ok(party)
    }
}

// ── DeleteParty ──────────────────────────────────────────────────────────────

pub struct DeletePartyUseCase<R: PartyRepository> {
    pub repo: R,
}

impl<R: PartyRepository> DeletePartyUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackofficeError> {
        if !self.repo.delete(id).await? {
            return Err(BackofficeError::PartyNotFound);
        }
        Ok(())
    }
}
