use primitive_types::U256;
use smartdefi_common::{
    asset_backing::{AssetBackingError, TokenConfig, MAX_FEE_PER_SIDE_BPS},
    config::NATIVE_COIN,
};

fn side_total(fees: &[U256]) -> U256 {
    fees.iter()
        .fold(U256::zero(), |total, fee| total.saturating_add(*fee))
}

/// Check a token configuration before anything is written
///
/// Rules are checked in a fixed order and the first failure is returned:
/// positive supply, buy-side fee cap, sell-side fee cap, native backing.
/// The initial backing cannot be negative.
pub fn validate_token_config(config: &TokenConfig) -> Result<(), AssetBackingError> {
    if config.total_supply.is_zero() {
        return Err(AssetBackingError::ZeroSupply);
    }

    let fees = config.fee_structure();
    let cap = U256::from(MAX_FEE_PER_SIDE_BPS);

    let buy = side_total(fees.buy_fees());
    if buy > cap {
        return Err(AssetBackingError::BuyFeesTooHigh {
            total: buy,
            cap: MAX_FEE_PER_SIDE_BPS,
        });
    }

    let sell = side_total(fees.sell_fees());
    if sell > cap {
        return Err(AssetBackingError::SellFeesTooHigh {
            total: sell,
            cap: MAX_FEE_PER_SIDE_BPS,
        });
    }

    if config.backing_asset != NATIVE_COIN {
        return Err(AssetBackingError::UnsupportedBackingAsset(
            config.backing_asset,
        ));
    }

    Ok(())
}
