//! Payer funding bootstrap.
//!
//! Ensures the payer can cover the greeting account's rent exemption plus a
//! flat fee buffer, topping up with an airdrop on clusters that allow one.
//! Fee estimation is deliberately out of scope; the buffer is a constant.

use hellodex_core::state::GREETING_RECORD_LEN;
use tracing::info;

use crate::context::Session;
use crate::errors::ClientResult;
use crate::submit;

/// Flat allowance for transaction fees on top of rent exemption.
pub const FEE_BUFFER_LAMPORTS: u64 = 100_000;

/// Top up the payer if its balance cannot cover rent exemption for a greeting
/// account plus [`FEE_BUFFER_LAMPORTS`]. Returns the resulting balance.
pub fn ensure_funded(session: &Session) -> ClientResult<u64> {
    let payer = session.payer_pubkey();
    let rent_exempt = session
        .rpc()
        .get_minimum_balance_for_rent_exemption(GREETING_RECORD_LEN)?;
    let needed = rent_exempt + FEE_BUFFER_LAMPORTS;

    let mut lamports = session.rpc().get_balance(&payer)?;
    if lamports < needed {
        let shortfall = needed - lamports;
        info!(%payer, shortfall, "requesting airdrop");
        let signature = session.rpc().request_airdrop(&payer, shortfall)?;
        submit::confirm(session, &signature)?;
        lamports = session.rpc().get_balance(&payer)?;
    }
    Ok(lamports)
}
