use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use tracing::info;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;

use crate::domain::types::{Party, PartyInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::party::{
    CreatePartyUseCase, DeletePartyUseCase, GetPartyUseCase, ListPartiesUseCase,
    UpdatePartyUseCase,
};

// ── GET /api/parties ─────────────────────────────────────────────────────────

pub async fn list_parties(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<Party>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListPartiesUseCase {
        repo: state.party_repo(),
    };
    let parties = usecase.execute(query.kind, query.page()).await?;
    Ok(Envelope::list(parties))
}

// ── GET /api/parties/{id} ────────────────────────────────────────────────────

pub async fn get_party(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Party>, BackofficeError> {
    let usecase = GetPartyUseCase {
        repo: state.party_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── POST /api/parties ────────────────────────────────────────────────────────

pub async fn create_party(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<PartyInput>,
) -> Result<Envelope<Party>, BackofficeError> {
    let usecase = CreatePartyUseCase {
        repo: state.party_repo(),
    };
    let party = usecase.execute(body).await?;
    info!(party_id = %party.id, by = %identity.username, "party created");
    Ok(Envelope::created(party))
}

// ── PUT /api/parties/{id} ────────────────────────────────────────────────────

pub async fn update_party(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PartyInput>,
) -> Result<Envelope<Party>, BackofficeError> {
    let usecase = UpdatePartyUseCase {
        repo: state.party_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?, body).await?))
}

// ── DELETE /api/parties/{id} ─────────────────────────────────────────────────

pub async fn delete_party(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<serde_json::Value>, BackofficeError> {
    let id = parse_id(&id)?;
    let usecase = DeletePartyUseCase {
        repo: state.party_repo(),
    };
    usecase.execute(id).await?;
    info!(party_id = %id, by = %identity.username, "party deleted");
    Ok(Envelope::empty())
}
