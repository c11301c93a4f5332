use multiversx_sc::proxy_imports::*;

use crate::types::{Petition, PetitionUpdate, Support};

pub struct PetitionRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PetitionRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PetitionRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PetitionRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct PetitionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> PetitionRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> PetitionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> PetitionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Governance ──

    pub fn set_authority_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        principal: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAuthorityContract")
            .argument(&principal)
            .original_result()
    }

    pub fn set_tracking_fee<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        new_fee: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTrackingFee")
            .argument(&new_fee)
            .original_result()
    }

    pub fn set_max_petitions<Arg0: ProxyArg<u64>>(
        self,
        new_max: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxPetitions")
            .argument(&new_max)
            .original_result()
    }

    // ── Petitions ──

    #[allow(clippy::too_many_arguments)]
    pub fn register_petition<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<u64>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg7: ProxyArg<u64>,
        Arg8: ProxyArg<u64>,
    >(
        self,
        name: Arg0,
        threshold: Arg1,
        location: Arg2,
        currency: Arg3,
        grace_period: Arg4,
        interest_rate: Arg5,
        group_type: Arg6,
        min_support: Arg7,
        max_support: Arg8,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("registerPetition")
            .argument(&name)
            .argument(&threshold)
            .argument(&location)
            .argument(&currency)
            .argument(&grace_period)
            .argument(&interest_rate)
            .argument(&group_type)
            .argument(&min_support)
            .argument(&max_support)
            .original_result()
    }

    pub fn add_verified_support<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        petition_id: Arg0,
        supporter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addVerifiedSupport")
            .argument(&petition_id)
            .argument(&supporter)
            .original_result()
    }

    pub fn update_petition<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        petition_id: Arg0,
        update_name: Arg1,
        update_threshold: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updatePetition")
            .argument(&petition_id)
            .argument(&update_name)
            .argument(&update_threshold)
            .original_result()
    }

    pub fn set_petition_status<Arg0: ProxyArg<u64>, Arg1: ProxyArg<bool>>(
        self,
        petition_id: Arg0,
        active: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPetitionStatus")
            .argument(&petition_id)
            .argument(&active)
            .original_result()
    }

    // ── Views ──

    pub fn get_petition<Arg0: ProxyArg<u64>>(
        self,
        petition_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<Petition<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPetition")
            .argument(&petition_id)
            .original_result()
    }

    pub fn get_petition_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPetitionCount")
            .original_result()
    }

    pub fn check_petition_existence<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkPetitionExistence")
            .argument(&name)
            .original_result()
    }

    pub fn get_petition_id_by_name<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPetitionIdByName")
            .argument(&name)
            .original_result()
    }

    pub fn get_verified_count<Arg0: ProxyArg<u64>>(
        self,
        petition_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVerifiedCount")
            .argument(&petition_id)
            .original_result()
    }

    pub fn get_unique_supporters<Arg0: ProxyArg<u64>>(
        self,
        petition_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUniqueSupporters")
            .argument(&petition_id)
            .original_result()
    }

    pub fn get_petition_update<Arg0: ProxyArg<u64>>(
        self,
        petition_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<PetitionUpdate<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPetitionUpdate")
            .argument(&petition_id)
            .original_result()
    }

    pub fn get_support<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        petition_id: Arg0,
        supporter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<Support>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupport")
            .argument(&petition_id)
            .argument(&supporter)
            .original_result()
    }

    pub fn has_supported<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        petition_id: Arg0,
        supporter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasSupported")
            .argument(&petition_id)
            .argument(&supporter)
            .original_result()
    }

    pub fn get_supporter_petitions<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        supporter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupporterPetitions")
            .argument(&supporter)
            .original_result()
    }

    pub fn is_verified_authority<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        principal: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isVerifiedAuthority")
            .argument(&principal)
            .original_result()
    }

    pub fn get_authority_contract(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Option<ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAuthorityContract")
            .original_result()
    }

    pub fn get_registry_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, u64, BigUint<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRegistryConfig")
            .original_result()
    }
}
