//! Deposit, withdrawal and swap orchestration.
//!
//! Every entry point follows the same shape: validate everything that can
//! be checked up front, then apply the legs in order. If a later leg still
//! fails, the earlier legs are reversed before the error is returned, so a
//! failed call leaves balances, reserves and the ledger exactly as they
//! were.
//!
//! # Reserve rule
//!
//! A payout of `asset` is accepted whenever the exchange holds at least
//! that much of `asset`. Deposited liquidity backs swaps and withdrawals
//! alike, and retained fees grow the reserve over time. [`Exchange::audit`]
//! reports when the reserve has fallen below the active principal.

use tracing::{info, warn};

use super::{PriceOracle, RateEngine};
use crate::assets::AssetBox;
use crate::config::ExchangeConfig;
use crate::domain::{
    AccountId, Amount, AssetId, CallContext, DepositReceipt, ExchangeEvent, OracleAmount, Pool,
    PoolId, Quote, Settlement, SwapReceipt, Timestamp, WithdrawalReceipt,
};
use crate::error::{DexError, Result};
use crate::ledger::PoolLedger;
use crate::math::{compute_interest, CheckedArithmetic};
use crate::registry::AssetRegistry;
use crate::traits::{FromConfig, FungibleAsset, PriceFeed};

/// A custodial exchange.
///
/// Holds every listed asset under its own [`AccountId`], records deposits
/// in a [`PoolLedger`], and prices conversions through the registered
/// feeds.
///
/// # Examples
///
/// ```
/// use lockswap::assets::{AssetBox, FixedPriceFeed, LedgerToken};
/// use lockswap::config::ExchangeConfig;
/// use lockswap::domain::{AccountId, Amount, AssetId, CallContext, PoolId, Timestamp};
/// use lockswap::exchange::Exchange;
/// use lockswap::traits::FungibleAsset;
///
/// let dex = AccountId::from_bytes([0xde; 32]);
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let link = AssetId::from_bytes([2u8; 32]);
///
/// let mut exchange = Exchange::new(dex, ExchangeConfig::default()).expect("config");
/// let token = LedgerToken::with_supply(link, alice, Amount::new(1_000)).expect("supply");
/// exchange
///     .register_asset(link, AssetBox::fungible(token), Box::new(FixedPriceFeed::new(716_878_975)))
///     .expect("register");
/// exchange
///     .asset_mut(link)
///     .expect("listed")
///     .approve(alice, dex, Amount::new(1_000))
///     .expect("approve");
///
/// let ctx = CallContext::new(alice, Timestamp::from_secs(0));
/// let receipt = exchange.provide_liquidity(ctx, link, Amount::new(400)).expect("deposit");
/// assert_eq!(receipt.pool_id, PoolId::new(0));
/// assert_eq!(exchange.reserve(link), Ok(Amount::new(400)));
/// ```
#[derive(Debug)]
pub struct Exchange {
    account: AccountId,
    config: ExchangeConfig,
    registry: AssetRegistry,
    ledger: PoolLedger,
    rates: RateEngine,
    events: Vec<ExchangeEvent>,
}

impl Exchange {
    /// An exchange with no listed assets, holding funds as `account`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` if it is invalid.
    pub fn new(account: AccountId, config: ExchangeConfig) -> Result<Self> {
        Ok(Self {
            account,
            config,
            registry: AssetRegistry::new(),
            ledger: PoolLedger::new(),
            rates: RateEngine::from_config(&config)?,
            events: Vec::new(),
        })
    }

    /// Lists `asset` with its transfer capability and price feed.
    ///
    /// # Errors
    ///
    /// See [`AssetRegistry::register_asset`].
    pub fn register_asset(
        &mut self,
        asset: AssetId,
        capability: AssetBox,
        feed: Box<dyn PriceFeed>,
    ) -> Result<()> {
        self.registry.register_asset(asset, capability, feed)
    }

    // -- views --------------------------------------------------------------

    /// The account the exchange holds funds under.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Listed assets.
    #[must_use]
    pub const fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Deposit records.
    #[must_use]
    pub const fn ledger(&self) -> &PoolLedger {
        &self.ledger
    }

    /// Listed asset ids in registration order.
    #[must_use]
    pub fn supported_assets(&self) -> &[AssetId] {
        self.registry.assets()
    }

    /// Transfer capability of a listed asset.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn asset(&self, asset: AssetId) -> Result<&AssetBox> {
        self.registry.capability(asset)
    }

    /// Mutable transfer capability, for funding accounts and approvals.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn asset_mut(&mut self, asset: AssetId) -> Result<&mut AssetBox> {
        self.registry.capability_mut(asset)
    }

    /// The pool with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidId`] if `id` was never assigned.
    pub fn pool(&self, id: PoolId) -> Result<&Pool> {
        self.ledger.pool(id)
    }

    /// Every pool id `owner` created, oldest first.
    #[must_use]
    pub fn owner_pool_ids(&self, owner: AccountId) -> &[PoolId] {
        self.ledger.owner_pool_ids(owner)
    }

    /// Amount of `asset` the exchange holds.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::AssetNotSupported`] if `asset` is not listed.
    pub fn reserve(&self, asset: AssetId) -> Result<Amount> {
        Ok(self.registry.capability(asset)?.balance_of(self.account))
    }

    /// Native value held by the wrapped-native asset.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NativeUnavailable`] if no wrapper is listed.
    pub fn native_balance(&self) -> Result<Amount> {
        Ok(self.registry.wrapper()?.native_balance())
    }

    /// Fee-free conversion at oracle scale.
    ///
    /// # Errors
    ///
    /// See [`RateEngine::quote`].
    pub fn quote(&self, from: AssetId, to: AssetId, amount: Amount) -> Result<OracleAmount> {
        self.rates.quote(&self.oracle(), from, to, amount)
    }

    /// Fee-adjusted conversion at asset scale.
    ///
    /// # Errors
    ///
    /// See [`RateEngine::quote_after_fee`].
    pub fn quote_after_fee(&self, from: AssetId, to: AssetId, amount: Amount) -> Result<Quote> {
        self.rates.quote_after_fee(&self.oracle(), from, to, amount)
    }

    /// Interest pool `id` would earn if withdrawn at `now`.
    ///
    /// # Errors
    ///
    /// - [`DexError::InvalidId`] if `id` was never assigned.
    /// - [`DexError::Underflow`] if `now` precedes the pool's creation.
    pub fn accrued_interest(&self, id: PoolId, now: Timestamp) -> Result<Amount> {
        let pool = self.ledger.pool(id)?;
        let elapsed = now.elapsed_since(pool.created_at())?;
        compute_interest(pool.amount(), elapsed, self.config.annual_rate_percent())
    }

    /// Journal of committed operations, oldest first.
    #[must_use]
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Drains the journal.
    pub fn take_events(&mut self) -> Vec<ExchangeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Checks the global bookkeeping invariants.
    ///
    /// No operation is gated on this; payouts only need the reserve to
    /// cover them.
    ///
    /// # Errors
    ///
    /// - [`DexError::ReserveShortfall`] if any asset's reserve is below the
    ///   principal of its active pools.
    /// - [`DexError::WrapperImbalance`] if the wrapper's native holdings
    ///   differ from its supply.
    pub fn audit(&self) -> Result<()> {
        for &asset in self.registry.assets() {
            let reserve = self.reserve(asset)?;
            let principal = self.ledger.active_principal(asset);
            if reserve < principal {
                return Err(DexError::ReserveShortfall {
                    asset,
                    reserve,
                    principal,
                });
            }
        }
        if let Ok(wrapper) = self.registry.wrapper() {
            let native = wrapper.native_balance();
            let supply = wrapper.total_supply();
            if native != supply {
                return Err(DexError::WrapperImbalance { native, supply });
            }
        }
        Ok(())
    }

    // -- deposits -----------------------------------------------------------

    /// Pulls `amount` of `asset` from the caller into a new locked pool.
    ///
    /// The caller must have approved the exchange's account for at least
    /// `amount`.
    ///
    /// # Errors
    ///
    /// In validation order: [`DexError::UnexpectedValue`],
    /// [`DexError::InvalidAsset`], [`DexError::AmountTooSmall`],
    /// [`DexError::AssetNotSupported`], [`DexError::InsufficientBalance`],
    /// [`DexError::InsufficientAllowance`].
    pub fn provide_liquidity(
        &mut self,
        ctx: CallContext,
        asset: AssetId,
        amount: Amount,
    ) -> Result<DepositReceipt> {
        reject_value(&ctx)?;
        if asset.is_zero() {
            return Err(DexError::InvalidAsset(asset));
        }
        if amount.is_zero() {
            return Err(DexError::AmountTooSmall { asset, amount });
        }
        self.registry.ensure_supported(asset)?;
        self.ensure_can_pull(ctx.caller, asset, amount)?;

        let me = self.account;
        self.registry
            .capability_mut(asset)?
            .transfer_from(me, ctx.caller, me, amount)?;
        match self.open_pool(ctx, asset, amount) {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                warn!(%err, %asset, %amount, "deposit failed after pull, refunding");
                let refund = self
                    .registry
                    .capability_mut(asset)
                    .and_then(|c| c.transfer(me, ctx.caller, amount));
                log_rollback(refund);
                Err(err)
            }
        }
    }

    /// Wraps the attached native value and deposits it as the
    /// wrapped-native asset.
    ///
    /// # Errors
    ///
    /// - [`DexError::NativeUnavailable`] if no wrapper is listed.
    /// - [`DexError::AmountTooSmall`] if no value is attached.
    pub fn provide_liquidity_native(&mut self, ctx: CallContext) -> Result<DepositReceipt> {
        let asset = self
            .registry
            .wrapped_native()
            .ok_or(DexError::NativeUnavailable)?;
        let value = ctx.value;
        if value.is_zero() {
            return Err(DexError::AmountTooSmall {
                asset,
                amount: value,
            });
        }

        let me = self.account;
        let (_, wrapper) = self.registry.wrapper_mut()?;
        let wrapped = wrapper.wrap(me, value)?;
        match self.open_pool(ctx, asset, wrapped) {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                warn!(%err, %value, "native deposit failed after wrap, unwrapping");
                let undo = self
                    .registry
                    .wrapper_mut()
                    .and_then(|(_, w)| w.unwrap(me, wrapped).map(|_| ()));
                log_rollback(undo);
                Err(err)
            }
        }
    }

    fn open_pool(
        &mut self,
        ctx: CallContext,
        asset: AssetId,
        amount: Amount,
    ) -> Result<DepositReceipt> {
        let pool_id = self.ledger.create_pool(
            ctx.caller,
            asset,
            amount,
            ctx.now,
            self.config.lock_period_secs(),
        )?;
        let pool = self.ledger.pool(pool_id)?;
        let receipt = DepositReceipt {
            pool_id,
            owner: ctx.caller,
            asset,
            amount,
            created_at: pool.created_at(),
            unlocks_at: pool.unlocks_at(),
        };
        info!(
            pool_id = %pool_id, owner = %ctx.caller, %asset, %amount,
            unlocks_at = %receipt.unlocks_at, "liquidity provided"
        );
        self.events.push(ExchangeEvent::Deposited(receipt));
        Ok(receipt)
    }

    // -- withdrawals --------------------------------------------------------

    /// Closes pool `id` and pays principal plus interest to its owner.
    ///
    /// With [`Settlement::Token`] of the pool's own asset the payout is
    /// `principal + interest`. Any other token is converted with the
    /// fee-adjusted quote. [`Settlement::Native`] converts to the
    /// wrapped-native asset (unless the pool already holds it) and unwraps.
    ///
    /// # Errors
    ///
    /// In validation order: [`DexError::UnexpectedValue`],
    /// [`DexError::InvalidId`], [`DexError::NotOwner`],
    /// [`DexError::PoolInactive`], [`DexError::PoolLocked`], then target
    /// validation ([`DexError::InvalidAsset`],
    /// [`DexError::AssetNotSupported`], [`DexError::NativeUnavailable`]),
    /// then [`DexError::InsufficientReserve`].
    pub fn remove_liquidity(
        &mut self,
        ctx: CallContext,
        id: PoolId,
        settlement: Settlement,
    ) -> Result<WithdrawalReceipt> {
        reject_value(&ctx)?;
        let pool = self.ledger.pool(id)?;
        if pool.owner() != ctx.caller {
            return Err(DexError::NotOwner);
        }
        if !pool.is_active() {
            return Err(DexError::PoolInactive(id));
        }
        if !pool.is_unlocked_at(ctx.now) {
            return Err(DexError::PoolLocked(pool.unlocks_at()));
        }
        let (source, principal, created_at) = (pool.asset(), pool.amount(), pool.created_at());
        let target = self.settlement_asset(settlement)?;

        let elapsed = ctx.now.elapsed_since(created_at)?;
        let interest = compute_interest(principal, elapsed, self.config.annual_rate_percent())?;
        let owed = principal.safe_add(&interest)?;
        let payout = if target == source {
            owed
        } else {
            self.quote_after_fee(source, target, owed)?.amount_out
        };
        self.ensure_payable(target, payout)?;

        let native_out = self.pay_out(ctx.caller, target, settlement, payout)?;
        if let Err(err) = self.ledger.close_pool(id) {
            warn!(%err, pool_id = %id, "close failed after payout, reversing");
            log_rollback(self.reverse_payout(ctx.caller, target, settlement, payout));
            return Err(err);
        }

        let receipt = WithdrawalReceipt {
            pool_id: id,
            owner: ctx.caller,
            settlement,
            token_to_receive: owed,
            token_to_receive_with_interest: payout,
            total_interest_earned: interest,
            native_out,
        };
        info!(
            pool_id = %id, owner = %ctx.caller, asset = %source, to = %target,
            %principal, %interest, %payout, "liquidity removed"
        );
        self.events.push(ExchangeEvent::Withdrawn(receipt));
        Ok(receipt)
    }

    fn settlement_asset(&self, settlement: Settlement) -> Result<AssetId> {
        match settlement {
            Settlement::Token(asset) => {
                if asset.is_zero() {
                    return Err(DexError::InvalidAsset(asset));
                }
                self.registry.ensure_supported(asset)?;
                Ok(asset)
            }
            Settlement::Native => self
                .registry
                .wrapped_native()
                .ok_or(DexError::NativeUnavailable),
        }
    }

    fn pay_out(
        &mut self,
        to: AccountId,
        asset: AssetId,
        settlement: Settlement,
        amount: Amount,
    ) -> Result<Amount> {
        let me = self.account;
        if settlement.is_native() {
            let (_, wrapper) = self.registry.wrapper_mut()?;
            wrapper.unwrap(me, amount)
        } else {
            self.registry
                .capability_mut(asset)?
                .transfer(me, to, amount)?;
            Ok(Amount::ZERO)
        }
    }

    fn reverse_payout(
        &mut self,
        to: AccountId,
        asset: AssetId,
        settlement: Settlement,
        amount: Amount,
    ) -> Result<()> {
        let me = self.account;
        if settlement.is_native() {
            let (_, wrapper) = self.registry.wrapper_mut()?;
            wrapper.wrap(me, amount).map(|_| ())
        } else {
            self.registry
                .capability_mut(asset)?
                .transfer(to, me, amount)
        }
    }

    // -- swaps --------------------------------------------------------------

    /// Sells `amount` of `from` for `to` at the fee-adjusted oracle rate.
    ///
    /// Neither side may be the wrapped-native asset; use
    /// [`swap_native_to_token`](Self::swap_native_to_token) and
    /// [`swap_token_to_native`](Self::swap_token_to_native) instead.
    ///
    /// # Errors
    ///
    /// In validation order: [`DexError::UnexpectedValue`],
    /// [`DexError::InvalidPair`], [`DexError::InvalidAsset`],
    /// [`DexError::WrongFunctionCall`], [`DexError::AssetNotSupported`],
    /// [`DexError::AmountTooSmall`], [`DexError::InsufficientBalance`],
    /// [`DexError::InsufficientAllowance`], quote errors, then
    /// [`DexError::InsufficientReserve`].
    pub fn swap(
        &mut self,
        ctx: CallContext,
        from: AssetId,
        to: AssetId,
        amount: Amount,
    ) -> Result<SwapReceipt> {
        reject_value(&ctx)?;
        if from == to {
            return Err(DexError::InvalidPair);
        }
        for asset in [from, to] {
            if asset.is_zero() {
                return Err(DexError::InvalidAsset(asset));
            }
        }
        if self.registry.is_wrapped_native(from) || self.registry.is_wrapped_native(to) {
            return Err(DexError::WrongFunctionCall);
        }
        self.registry.ensure_supported(from)?;
        self.registry.ensure_supported(to)?;
        if amount.is_zero() {
            return Err(DexError::AmountTooSmall {
                asset: from,
                amount,
            });
        }
        self.ensure_can_pull(ctx.caller, from, amount)?;
        let quote = self.quote_after_fee(from, to, amount)?;
        self.ensure_payable(to, quote.amount_out)?;

        let me = self.account;
        self.registry
            .capability_mut(from)?
            .transfer_from(me, ctx.caller, me, amount)?;
        let paid = self
            .registry
            .capability_mut(to)
            .and_then(|c| c.transfer(me, ctx.caller, quote.amount_out));
        if let Err(err) = paid {
            warn!(%err, %from, %to, "swap payout failed, returning input");
            let refund = self
                .registry
                .capability_mut(from)
                .and_then(|c| c.transfer(me, ctx.caller, amount));
            log_rollback(refund);
            return Err(err);
        }

        Ok(self.record_swap(ctx.caller, Settlement::Token(from), Settlement::Token(to), &quote))
    }

    /// Wraps the attached native value and sells it for `to`.
    ///
    /// # Errors
    ///
    /// - [`DexError::NativeUnavailable`] if no wrapper is listed.
    /// - [`DexError::InvalidAsset`] if `to` is zero.
    /// - [`DexError::InvalidPair`] if `to` is the wrapped-native asset.
    /// - [`DexError::AssetNotSupported`] if `to` is not listed.
    /// - [`DexError::AmountTooSmall`] if no value is attached.
    /// - quote errors, then [`DexError::InsufficientReserve`].
    pub fn swap_native_to_token(&mut self, ctx: CallContext, to: AssetId) -> Result<SwapReceipt> {
        let native = self
            .registry
            .wrapped_native()
            .ok_or(DexError::NativeUnavailable)?;
        if to.is_zero() {
            return Err(DexError::InvalidAsset(to));
        }
        if to == native {
            return Err(DexError::InvalidPair);
        }
        self.registry.ensure_supported(to)?;
        let value = ctx.value;
        if value.is_zero() {
            return Err(DexError::AmountTooSmall {
                asset: native,
                amount: value,
            });
        }
        let quote = self.quote_after_fee(native, to, value)?;
        self.ensure_payable(to, quote.amount_out)?;

        let me = self.account;
        let (_, wrapper) = self.registry.wrapper_mut()?;
        let wrapped = wrapper.wrap(me, value)?;
        let paid = self
            .registry
            .capability_mut(to)
            .and_then(|c| c.transfer(me, ctx.caller, quote.amount_out));
        if let Err(err) = paid {
            warn!(%err, %to, "native swap payout failed, unwrapping input");
            let undo = self
                .registry
                .wrapper_mut()
                .and_then(|(_, w)| w.unwrap(me, wrapped).map(|_| ()));
            log_rollback(undo);
            return Err(err);
        }

        Ok(self.record_swap(ctx.caller, Settlement::Native, Settlement::Token(to), &quote))
    }

    /// Sells `amount` of `from` for the wrapped-native asset and releases
    /// the proceeds as native value.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnexpectedValue`] if value is attached.
    /// - [`DexError::NativeUnavailable`] if no wrapper is listed.
    /// - [`DexError::InvalidAsset`] if `from` is zero.
    /// - [`DexError::InvalidPair`] if `from` is the wrapped-native asset.
    /// - [`DexError::AssetNotSupported`], [`DexError::AmountTooSmall`],
    ///   [`DexError::InsufficientBalance`],
    ///   [`DexError::InsufficientAllowance`], quote errors, then
    ///   [`DexError::InsufficientReserve`].
    pub fn swap_token_to_native(
        &mut self,
        ctx: CallContext,
        from: AssetId,
        amount: Amount,
    ) -> Result<SwapReceipt> {
        reject_value(&ctx)?;
        let native = self
            .registry
            .wrapped_native()
            .ok_or(DexError::NativeUnavailable)?;
        if from.is_zero() {
            return Err(DexError::InvalidAsset(from));
        }
        if from == native {
            return Err(DexError::InvalidPair);
        }
        self.registry.ensure_supported(from)?;
        if amount.is_zero() {
            return Err(DexError::AmountTooSmall {
                asset: from,
                amount,
            });
        }
        self.ensure_can_pull(ctx.caller, from, amount)?;
        let quote = self.quote_after_fee(from, native, amount)?;
        self.ensure_payable(native, quote.amount_out)?;

        let me = self.account;
        self.registry
            .capability_mut(from)?
            .transfer_from(me, ctx.caller, me, amount)?;
        let released = self
            .registry
            .wrapper_mut()
            .and_then(|(_, w)| w.unwrap(me, quote.amount_out));
        if let Err(err) = released {
            warn!(%err, %from, "native release failed, returning input");
            let refund = self
                .registry
                .capability_mut(from)
                .and_then(|c| c.transfer(me, ctx.caller, amount));
            log_rollback(refund);
            return Err(err);
        }

        Ok(self.record_swap(ctx.caller, Settlement::Token(from), Settlement::Native, &quote))
    }

    fn record_swap(
        &mut self,
        user: AccountId,
        sold: Settlement,
        bought: Settlement,
        quote: &Quote,
    ) -> SwapReceipt {
        let receipt = SwapReceipt {
            user,
            sold,
            bought,
            token_swapped: quote.from_amount,
            token_received: quote.amount_out,
            transaction_fee: quote.fee_out,
        };
        info!(
            %user, from = %quote.from_asset, to = %quote.to_asset,
            amount_in = %quote.from_amount, amount_out = %quote.amount_out,
            fee = %quote.fee_out, "swap settled"
        );
        self.events.push(ExchangeEvent::Swapped(receipt));
        receipt
    }

    // -- shared checks ------------------------------------------------------

    fn oracle(&self) -> PriceOracle<'_> {
        PriceOracle::new(&self.registry, self.config.oracle_decimals())
    }

    fn ensure_can_pull(&self, owner: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        let capability = self.registry.capability(asset)?;
        if capability.balance_of(owner) < amount {
            return Err(DexError::InsufficientBalance {
                account: owner,
                asset,
            });
        }
        if capability.allowance(owner, self.account) < amount {
            return Err(DexError::InsufficientAllowance {
                owner,
                spender: self.account,
                asset,
            });
        }
        Ok(())
    }

    fn ensure_payable(&self, asset: AssetId, payout: Amount) -> Result<()> {
        let reserve = self.reserve(asset)?;
        if reserve.is_zero() || reserve < payout {
            return Err(DexError::InsufficientReserve {
                asset,
                required: payout,
                available: reserve,
            });
        }
        Ok(())
    }
}

fn reject_value(ctx: &CallContext) -> Result<()> {
    if ctx.value.is_zero() {
        Ok(())
    } else {
        Err(DexError::UnexpectedValue(ctx.value))
    }
}

fn log_rollback(result: Result<()>) {
    if let Err(err) = result {
        warn!(%err, "rollback leg failed");
    }
}
