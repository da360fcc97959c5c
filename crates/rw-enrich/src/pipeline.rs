//! Per-entity enrichment and the run loop around it.

use std::collections::HashSet;

use chrono::Utc;
use rw_config::{FallbackDirectory, RankingConfig, WatchConfig};
use rw_core::entities::{
    CandidateContact, EnrichmentRecord, Prospect, RegistryEntity, SearchHit, VerifiedContact,
};
use rw_core::enums::ContactSource;
use rw_core::responses::{DedupResponse, EnrichRunResponse};
use rw_resolve::{
    Scorer, candidate_from_result, contact_key, dedup_across, mentions_entity, normalize, rank,
    search_queries, verify,
};
use rw_search::{SearchError, SearchProvider, SearchSession};

use crate::error::StateError;
use crate::state::StateStore;

/// Knobs for one enrichment run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Re-enrich entities whose latest record is already complete.
    pub force: bool,
    /// Stop after attempting this many entities.
    pub limit: Option<usize>,
}

/// Resolves registry entities into scored prospects.
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    scorer: Scorer,
    ranking: RankingConfig,
    fallback: FallbackDirectory,
}

impl Enricher {
    #[must_use]
    pub const fn new(scorer: Scorer, ranking: RankingConfig, fallback: FallbackDirectory) -> Self {
        Self {
            scorer,
            ranking,
            fallback,
        }
    }

    #[must_use]
    pub fn from_config(config: &WatchConfig) -> Self {
        Self::new(
            Scorer::new(config.scoring.clone()),
            config.ranking.clone(),
            config.fallback.clone(),
        )
    }

    #[must_use]
    pub const fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Resolve one entity.
    ///
    /// Queries run most specific first and stop at the first one that
    /// yields a verified contact. When none does, the fallback directory
    /// supplies the contacts.
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchError`]; the entity is then not resolved.
    pub async fn resolve<P: SearchProvider>(
        &self,
        entity: &RegistryEntity,
        session: &mut SearchSession<P>,
    ) -> Result<Prospect, SearchError> {
        let mut candidates = Vec::new();
        for query in search_queries(entity) {
            let hits = session.search(&query.text).await?;
            candidates = verified_candidates(entity, &hits, query.source);
            if !candidates.is_empty() {
                break;
            }
        }

        if candidates.is_empty() {
            candidates = self.fallback_candidates(entity);
            if !candidates.is_empty() {
                tracing::debug!(entity = %entity.name, "using fallback directory contacts");
            }
        }

        Ok(self.build_prospect(entity, candidates))
    }

    /// Rank, score, and wrap candidates into a [`Prospect`].
    #[must_use]
    pub fn build_prospect(&self, entity: &RegistryEntity, candidates: Vec<CandidateContact>) -> Prospect {
        let contacts: Vec<VerifiedContact> = rank(candidates, &self.ranking)
            .into_iter()
            .map(VerifiedContact::from)
            .collect();
        let confidence = self.scorer.prospect_confidence(entity, &contacts);
        Prospect {
            entity: entity.clone(),
            contacts,
            confidence,
            high_confidence: self.scorer.is_high_confidence(confidence),
            enriched_at: Utc::now(),
        }
    }

    fn fallback_candidates(&self, entity: &RegistryEntity) -> Vec<CandidateContact> {
        self.fallback
            .contacts_for(&normalize(&entity.name))
            .iter()
            .map(|entry| {
                let mut contact =
                    CandidateContact::new(&entry.name, &entry.title, ContactSource::CompanySite);
                contact.email.clone_from(&entry.email);
                contact.linkedin_url.clone_from(&entry.linkedin_url);
                contact
            })
            .collect()
    }

    /// Enrich `entities` in order, appending a record after each one.
    ///
    /// Entities already complete in the state file are skipped unless
    /// `options.force` is set. A search failure becomes a `failed` record
    /// and the run moves on. `observe` sees every record as it is written.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the state file cannot be read or appended
    /// to; records written before the failure are kept.
    pub async fn run<P, F>(
        &self,
        entities: &[RegistryEntity],
        session: &mut SearchSession<P>,
        store: &StateStore,
        options: RunOptions,
        mut observe: F,
    ) -> Result<EnrichRunResponse, StateError>
    where
        P: SearchProvider,
        F: FnMut(&EnrichmentRecord),
    {
        let state = store.load()?;
        let mut report = EnrichRunResponse::default();

        for entity in entities {
            if !options.force && state.is_complete(&entity.name) {
                report.skipped += 1;
                continue;
            }
            if options.limit.is_some_and(|limit| report.attempted >= limit) {
                break;
            }
            report.attempted += 1;

            let record = match self.resolve(entity, session).await {
                Ok(prospect) => {
                    report.completed += 1;
                    if prospect.high_confidence {
                        report.high_confidence += 1;
                    }
                    tracing::info!(
                        entity = %entity.name,
                        contacts = prospect.contacts.len(),
                        confidence = prospect.confidence,
                        "entity enriched"
                    );
                    EnrichmentRecord::complete(prospect)
                }
                Err(error) => {
                    report.failed += 1;
                    tracing::warn!(entity = %entity.name, %error, "enrichment failed");
                    EnrichmentRecord::failed(&entity.name, error.to_string())
                }
            };
            store.append(&record)?;
            observe(&record);
        }

        Ok(report)
    }

    /// Flag contacts shared across persisted prospects and rewrite the state.
    ///
    /// Confidence is recomputed afterwards since a prospect's primary contact
    /// may have become a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the state file cannot be read or replaced.
    pub fn dedup(&self, store: &StateStore) -> Result<DedupResponse, StateError> {
        let mut state = store.load()?;
        let mut prospects: Vec<Prospect> = state.prospects().cloned().collect();
        let flagged = dedup_across(&mut prospects);

        let contacts: usize = prospects.iter().map(|p| p.contacts.len()).sum();
        let entities = prospects.len();

        let mut updated = prospects.into_iter();
        for record in state.records_mut().filter(|r| r.prospect.is_some()) {
            let Some(mut prospect) = updated.next() else {
                break;
            };
            prospect.confidence = self.scorer.prospect_confidence(&prospect.entity, &prospect.contacts);
            prospect.high_confidence = self.scorer.is_high_confidence(prospect.confidence);
            record.prospect = Some(prospect);
        }
        store.compact(&state)?;

        tracing::info!(entities, contacts, flagged, "cross-entity dedup finished");
        Ok(DedupResponse {
            entities,
            contacts,
            duplicates_flagged: flagged,
        })
    }
}

/// Candidates from one page of hits that mention the entity and whose
/// claimed employer checks out. Repeats of the same person keep the first.
fn verified_candidates(
    entity: &RegistryEntity,
    hits: &[SearchHit],
    source: ContactSource,
) -> Vec<CandidateContact> {
    let mut seen = HashSet::new();
    hits.iter()
        .filter(|hit| mentions_entity(&hit.title, &hit.snippet, &entity.name))
        .filter_map(|hit| candidate_from_result(hit, source))
        .filter(|candidate| {
            let ok = verify(candidate, &entity.name);
            if !ok {
                tracing::debug!(
                    entity = %entity.name,
                    contact = %candidate.name,
                    employer = candidate.employer.as_deref().unwrap_or_default(),
                    "employer does not match, dropping contact"
                );
            }
            ok
        })
        .filter(|candidate| seen.insert(contact_key(candidate)))
        .collect()
}
