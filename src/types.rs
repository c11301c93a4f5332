multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::validation::load_small;

// ============================================================
// Currency — denomination a petition's support is tracked in
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    /// Parses the ticker text callers submit (`STX`, `USD`, `BTC`).
    /// Matching is case-sensitive.
    pub fn from_ticker<M: ManagedTypeApi>(ticker: &ManagedBuffer<M>) -> Option<Self> {
        let mut scratch = [0u8; 3];
        match load_small(ticker, &mut scratch)? {
            b"STX" => Some(Currency::Stx),
            b"USD" => Some(Currency::Usd),
            b"BTC" => Some(Currency::Btc),
            _ => None,
        }
    }
}

// ============================================================
// Group Type — kind of community backing the petition
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum GroupType {
    Rural,
    Urban,
    Community,
}

impl GroupType {
    pub fn from_label<M: ManagedTypeApi>(label: &ManagedBuffer<M>) -> Option<Self> {
        let mut scratch = [0u8; 9];
        match load_small(label, &mut scratch)? {
            b"rural" => Some(GroupType::Rural),
            b"urban" => Some(GroupType::Urban),
            b"community" => Some(GroupType::Community),
            _ => None,
        }
    }
}

// ============================================================
// Petition — the core registry record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Petition<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    /// Target number of verified supports
    pub threshold: u64,
    pub creator: ManagedAddress<M>,
    /// `false` once the creator deactivates it; inactive petitions refuse supports
    pub status: bool,
    /// Block nonce at creation, refreshed on every update
    pub timestamp: u64,
    pub support_count: u64,
    /// Always equal to `support_count`: a supporter can only back a petition once
    pub unique_supporters: u64,
    pub location: ManagedBuffer<M>,
    pub currency: Currency,
    pub grace_period: u64,
    pub interest_rate: u64,
    pub group_type: GroupType,
    pub min_support: u64,
    pub max_support: u64,
}

// ============================================================
// Petition Update — audit record of the last rename/re-threshold
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PetitionUpdate<M: ManagedTypeApi> {
    pub update_name: ManagedBuffer<M>,
    pub update_threshold: u64,
    pub update_timestamp: u64,
    pub updater: ManagedAddress<M>,
}

// ============================================================
// Support — one per (petition, supporter); presence is the proof
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Support {
    pub timestamp: u64,
    pub verified: bool,
}
