#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod petition_registry_proxy;
pub mod types;
pub mod validation;

use errors::*;
use types::{Currency, GroupType, Petition, PetitionUpdate, Support};

// ============================================================
// Constants
// ============================================================

/// Capacity set at deploy; governance can raise or lower it later
pub const DEFAULT_MAX_PETITIONS: u64 = 1_000;

/// Registration fee set at deploy, in the smallest EGLD denomination
pub const DEFAULT_TRACKING_FEE: u64 = 1_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PetitionRegistry {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.next_petition_id().set(0u64);
        self.max_petitions().set(DEFAULT_MAX_PETITIONS);
        self.tracking_fee().set(BigUint::from(DEFAULT_TRACKING_FEE));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // GOVERNANCE
    // The authority contract is assigned once. Fee and capacity
    // changes only require that it exists.
    // ========================================================

    #[endpoint(setAuthorityContract)]
    fn set_authority_contract(&self, principal: ManagedAddress) -> bool {
        require!(!principal.is_zero(), ERR_NOT_AUTHORIZED);
        require!(
            self.authority_contract().is_empty(),
            ERR_AUTHORITY_NOT_VERIFIED
        );

        self.authority_contract().set(&principal);
        self.authority_contract_set_event(&principal);
        true
    }

    #[endpoint(setTrackingFee)]
    fn set_tracking_fee(&self, new_fee: BigUint) -> bool {
        require!(
            !self.authority_contract().is_empty(),
            ERR_AUTHORITY_NOT_VERIFIED
        );

        self.tracking_fee().set(&new_fee);
        self.tracking_fee_set_event(&new_fee);
        true
    }

    #[endpoint(setMaxPetitions)]
    fn set_max_petitions(&self, new_max: u64) -> bool {
        require!(
            !self.authority_contract().is_empty(),
            ERR_AUTHORITY_NOT_VERIFIED
        );
        require!(new_max > 0, ERR_INVALID_UPDATE_PARAM);

        self.max_petitions().set(new_max);
        self.max_petitions_set_event(new_max);
        true
    }

    // ========================================================
    // ENDPOINT: registerPetition
    // Checks run in a fixed order; the first failure is reported.
    // The tracking fee is attached as EGLD and forwarded to the
    // authority contract in the same transaction.
    // ========================================================

    #[endpoint(registerPetition)]
    #[payable("EGLD")]
    fn register_petition(
        &self,
        name: ManagedBuffer,
        threshold: u64,
        location: ManagedBuffer,
        currency: ManagedBuffer,
        grace_period: u64,
        interest_rate: u64,
        group_type: ManagedBuffer,
        min_support: u64,
        max_support: u64,
    ) -> u64 {
        let petition_id = self.next_petition_id().get();
        require!(
            petition_id < self.max_petitions().get(),
            ERR_MAX_PETITIONS_EXCEEDED
        );
        require!(validation::is_valid_text(&name), ERR_INVALID_UPDATE_PARAM);
        require!(threshold > 0, ERR_INVALID_THRESHOLD);
        require!(validation::is_valid_text(&location), ERR_INVALID_LOCATION);
        let Some(currency) = Currency::from_ticker(&currency) else {
            sc_panic!(ERR_INVALID_CURRENCY);
        };
        require!(
            validation::is_valid_grace_period(grace_period),
            ERR_INVALID_GRACE_PERIOD
        );
        require!(
            validation::is_valid_interest_rate(interest_rate),
            ERR_INVALID_INTEREST_RATE
        );
        let Some(group_type) = GroupType::from_label(&group_type) else {
            sc_panic!(ERR_INVALID_GROUP_TYPE);
        };
        require!(min_support > 0, ERR_INVALID_MIN_SUPPORT);
        require!(max_support > 0, ERR_INVALID_MAX_SUPPORT);
        require!(
            !self.petitions_by_name().contains_key(&name),
            ERR_SUPPORT_ALREADY_EXISTS
        );
        require!(
            !self.authority_contract().is_empty(),
            ERR_AUTHORITY_NOT_VERIFIED
        );

        let caller = self.blockchain().get_caller();
        let authority = self.authority_contract().get();
        let fee = self.tracking_fee().get();
        let payment = self.call_value().egld_value().clone_value();
        require!(payment == fee, ERR_FEE_MISMATCH);

        // ── Fee goes out before the record is written; a failed transfer reverts both ──
        if fee > 0u64 {
            self.send().direct_egld(&authority, &fee);
        }
        self.fee_transferred_event(&caller, &authority, &fee);

        let timestamp = self.blockchain().get_block_nonce();
        let petition = Petition {
            name: name.clone(),
            threshold,
            creator: caller.clone(),
            status: true,
            timestamp,
            support_count: 0,
            unique_supporters: 0,
            location,
            currency,
            grace_period,
            interest_rate,
            group_type,
            min_support,
            max_support,
        };

        self.petitions(petition_id).set(&petition);
        self.petitions_by_name().insert(name.clone(), petition_id);
        self.next_petition_id().set(petition_id + 1);

        self.petition_registered_event(petition_id, &caller, &name);

        petition_id
    }

    // ========================================================
    // ENDPOINT: addVerifiedSupport
    // One support per (petition, supporter). A repeated call
    // fails instead of counting twice.
    // ========================================================

    #[endpoint(addVerifiedSupport)]
    fn add_verified_support(&self, petition_id: u64, supporter: ManagedAddress) -> bool {
        require!(
            !self.petitions(petition_id).is_empty(),
            ERR_PETITION_NOT_FOUND
        );

        let mut petition = self.petitions(petition_id).get();
        require!(petition.status, ERR_INVALID_STATUS);
        require!(
            self.supports(petition_id, &supporter).is_empty(),
            ERR_ALREADY_SUPPORTED
        );

        let timestamp = self.blockchain().get_block_nonce();
        self.supports(petition_id, &supporter).set(Support {
            timestamp,
            verified: true,
        });

        petition.support_count += 1;
        petition.unique_supporters += 1;
        self.petitions(petition_id).set(&petition);
        self.supporter_petitions(&supporter).push(&petition_id);

        self.support_added_event(petition_id, &supporter, petition.support_count);
        true
    }

    // ========================================================
    // ENDPOINT: updatePetition
    // Creator-only rename / re-threshold. Keeps the name index
    // in step and overwrites the last-update audit record.
    // ========================================================

    #[endpoint(updatePetition)]
    fn update_petition(
        &self,
        petition_id: u64,
        update_name: ManagedBuffer,
        update_threshold: u64,
    ) -> bool {
        let caller = self.blockchain().get_caller();
        require!(
            !self.petitions(petition_id).is_empty(),
            ERR_PETITION_NOT_FOUND
        );

        let mut petition = self.petitions(petition_id).get();
        require!(petition.creator == caller, ERR_NOT_AUTHORIZED);
        require!(
            validation::is_valid_text(&update_name),
            ERR_INVALID_UPDATE_PARAM
        );
        require!(update_threshold > 0, ERR_INVALID_THRESHOLD);
        if let Some(owner_id) = self.petitions_by_name().get(&update_name) {
            require!(owner_id == petition_id, ERR_SUPPORT_ALREADY_EXISTS);
        }

        let timestamp = self.blockchain().get_block_nonce();
        self.rename(&petition.name, &update_name, petition_id);

        petition.name = update_name.clone();
        petition.threshold = update_threshold;
        petition.timestamp = timestamp;
        self.petitions(petition_id).set(&petition);

        self.petition_updates(petition_id).set(PetitionUpdate {
            update_name: update_name.clone(),
            update_threshold,
            update_timestamp: timestamp,
            updater: caller.clone(),
        });

        self.petition_updated_event(petition_id, &caller, &update_name);
        true
    }

    // ========================================================
    // ENDPOINT: setPetitionStatus
    // Creator can close a petition to new supports and reopen it.
    // The name stays reserved while inactive.
    // ========================================================

    #[endpoint(setPetitionStatus)]
    fn set_petition_status(&self, petition_id: u64, active: bool) -> bool {
        let caller = self.blockchain().get_caller();
        require!(
            !self.petitions(petition_id).is_empty(),
            ERR_PETITION_NOT_FOUND
        );

        let mut petition = self.petitions(petition_id).get();
        require!(petition.creator == caller, ERR_NOT_AUTHORIZED);
        require!(petition.status != active, ERR_INVALID_STATUS);

        petition.status = active;
        self.petitions(petition_id).set(&petition);

        self.petition_status_changed_event(petition_id, &caller, active);
        true
    }

    // ========================================================
    // INTERNAL: name index
    // Only writer of the index after registration.
    // ========================================================

    fn rename(&self, old_name: &ManagedBuffer, new_name: &ManagedBuffer, petition_id: u64) {
        let mut index = self.petitions_by_name();
        index.remove(old_name);
        index.insert(new_name.clone(), petition_id);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPetition)]
    fn get_petition(&self, petition_id: u64) -> Option<Petition<Self::Api>> {
        if self.petitions(petition_id).is_empty() {
            return None;
        }
        Some(self.petitions(petition_id).get())
    }

    #[view(getPetitionCount)]
    fn get_petition_count(&self) -> u64 {
        self.next_petition_id().get()
    }

    #[view(checkPetitionExistence)]
    fn check_petition_existence(&self, name: ManagedBuffer) -> bool {
        self.petitions_by_name().contains_key(&name)
    }

    #[view(getPetitionIdByName)]
    fn get_petition_id_by_name(&self, name: ManagedBuffer) -> Option<u64> {
        self.petitions_by_name().get(&name)
    }

    #[view(getVerifiedCount)]
    fn get_verified_count(&self, petition_id: u64) -> u64 {
        require!(
            !self.petitions(petition_id).is_empty(),
            ERR_PETITION_NOT_FOUND
        );
        self.petitions(petition_id).get().support_count
    }

    #[view(getUniqueSupporters)]
    fn get_unique_supporters(&self, petition_id: u64) -> u64 {
        require!(
            !self.petitions(petition_id).is_empty(),
            ERR_PETITION_NOT_FOUND
        );
        self.petitions(petition_id).get().unique_supporters
    }

    #[view(getPetitionUpdate)]
    fn get_petition_update(&self, petition_id: u64) -> Option<PetitionUpdate<Self::Api>> {
        if self.petition_updates(petition_id).is_empty() {
            return None;
        }
        Some(self.petition_updates(petition_id).get())
    }

    #[view(getSupport)]
    fn get_support(&self, petition_id: u64, supporter: ManagedAddress) -> Option<Support> {
        if self.supports(petition_id, &supporter).is_empty() {
            return None;
        }
        Some(self.supports(petition_id, &supporter).get())
    }

    #[view(hasSupported)]
    fn has_supported(&self, petition_id: u64, supporter: ManagedAddress) -> bool {
        !self.supports(petition_id, &supporter).is_empty()
    }

    #[view(getSupporterPetitions)]
    fn get_supporter_petitions(&self, supporter: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for petition_id in self.supporter_petitions(&supporter).iter() {
            result.push(petition_id);
        }
        result
    }

    #[view(isVerifiedAuthority)]
    fn is_verified_authority(&self, principal: ManagedAddress) -> bool {
        !self.authority_contract().is_empty() && self.authority_contract().get() == principal
    }

    #[view(getAuthorityContract)]
    fn get_authority_contract(&self) -> Option<ManagedAddress> {
        if self.authority_contract().is_empty() {
            return None;
        }
        Some(self.authority_contract().get())
    }

    #[view(getRegistryConfig)]
    fn get_registry_config(&self) -> MultiValue3<u64, u64, BigUint> {
        let next_id = self.next_petition_id().get();
        let max = self.max_petitions().get();
        let fee = self.tracking_fee().get();
        (next_id, max, fee).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("authorityContractSet")]
    fn authority_contract_set_event(&self, #[indexed] principal: &ManagedAddress);

    #[event("trackingFeeSet")]
    fn tracking_fee_set_event(&self, #[indexed] new_fee: &BigUint);

    #[event("maxPetitionsSet")]
    fn max_petitions_set_event(&self, #[indexed] new_max: u64);

    #[event("feeTransferred")]
    fn fee_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("petitionRegistered")]
    fn petition_registered_event(
        &self,
        #[indexed] petition_id: u64,
        #[indexed] creator: &ManagedAddress,
        name: &ManagedBuffer,
    );

    #[event("supportAdded")]
    fn support_added_event(
        &self,
        #[indexed] petition_id: u64,
        #[indexed] supporter: &ManagedAddress,
        support_count: u64,
    );

    #[event("petitionUpdated")]
    fn petition_updated_event(
        &self,
        #[indexed] petition_id: u64,
        #[indexed] updater: &ManagedAddress,
        name: &ManagedBuffer,
    );

    #[event("petitionStatusChanged")]
    fn petition_status_changed_event(
        &self,
        #[indexed] petition_id: u64,
        #[indexed] creator: &ManagedAddress,
        active: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("nextPetitionId")]
    fn next_petition_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxPetitions")]
    fn max_petitions(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("trackingFee")]
    fn tracking_fee(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("authorityContract")]
    fn authority_contract(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Petitions ──

    #[storage_mapper("petitions")]
    fn petitions(&self, petition_id: u64) -> SingleValueMapper<Petition<Self::Api>>;

    #[storage_mapper("petitionUpdates")]
    fn petition_updates(&self, petition_id: u64) -> SingleValueMapper<PetitionUpdate<Self::Api>>;

    // MapMapper keeps its own key set, so id 0 (encoded empty) still reads as present.
    #[storage_mapper("petitionsByName")]
    fn petitions_by_name(&self) -> MapMapper<ManagedBuffer, u64>;

    // ── Supports ──

    #[storage_mapper("supports")]
    fn supports(&self, petition_id: u64, supporter: &ManagedAddress) -> SingleValueMapper<Support>;

    #[storage_mapper("supporterPetitions")]
    fn supporter_petitions(&self, supporter: &ManagedAddress) -> VecMapper<u64>;
}
