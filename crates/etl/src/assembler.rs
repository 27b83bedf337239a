use crate::{dates::parse_transfer_time, ETLError};
use std::collections::HashMap;
use tracing::debug;
use types::{Flow, NormalizedTransfer, SwapRecord, TransferEvent};

/// Runs both stages: normalization, then pairing.
pub fn assemble(transfers: &[TransferEvent]) -> Result<Vec<SwapRecord>, ETLError> {
    let normalized = normalize(transfers)?;
    Ok(pair(&normalized))
}

/// Scales a raw token amount by its decimals.
pub fn scale_amount(amount: u64, decimals: u32) -> f64 {
    if decimals == 0 {
        return amount as f64;
    }
    amount as f64 / 10f64.powi(decimals as i32)
}

pub fn normalize(transfers: &[TransferEvent]) -> Result<Vec<NormalizedTransfer>, ETLError> {
    transfers.iter().map(normalize_transfer).collect()
}

fn normalize_transfer(transfer: &TransferEvent) -> Result<NormalizedTransfer, ETLError> {
    let datetime =
        parse_transfer_time(&transfer.time).ok_or_else(|| ETLError::MalformedTime {
            trans_id: transfer.trans_id.clone(),
            time: transfer.time.clone(),
        })?;

    Ok(NormalizedTransfer {
        trans_id: transfer.trans_id.clone(),
        datetime,
        // block_time is what the chain reported, keep it over the parsed `time`
        timestamp: transfer.block_time,
        amount: scale_amount(transfer.amount, transfer.token_decimals),
        from_address: transfer.from_address.clone(),
        to_address: transfer.to_address.clone(),
        token_address: transfer.token_address.clone(),
        flow: transfer.flow,
    })
}

/// Joins every `in` leg with the `out` legs of the same transaction.
///
/// Transactions present on one side only produce nothing. A transaction with
/// several legs per side produces the cross product of its `in` and `out`
/// legs. Output follows the order of the `in` legs.
pub fn pair(rows: &[NormalizedTransfer]) -> Vec<SwapRecord> {
    let mut outgoing: HashMap<&str, Vec<&NormalizedTransfer>> = HashMap::new();
    for row in rows.iter().filter(|row| row.flow == Flow::Out) {
        outgoing.entry(row.trans_id.as_str()).or_default().push(row);
    }

    let mut swaps = Vec::new();
    let mut unmatched = 0;
    for leg_in in rows.iter().filter(|row| row.flow == Flow::In) {
        let Some(legs_out) = outgoing.get(leg_in.trans_id.as_str()) else {
            unmatched += 1;
            continue;
        };
        for leg_out in legs_out {
            swaps.push(SwapRecord {
                trans_id: leg_in.trans_id.clone(),
                datetime: leg_in.datetime,
                timestamp: leg_in.timestamp,
                owner_address: leg_in.from_address.clone(),
                token_in_address: leg_in.token_address.clone(),
                amount_in: leg_in.amount,
                token_out_address: leg_out.token_address.clone(),
                amount_out: leg_out.amount,
            });
        }
    }

    debug!(
        rows = rows.len(),
        swaps = swaps.len(),
        unmatched_in = unmatched,
        "Paired transfer legs"
    );
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(trans_id: &str, flow: Flow, amount: u64, decimals: u32, token: &str) -> TransferEvent {
        TransferEvent {
            block_id: Some(275_302_111),
            trans_id: trans_id.to_string(),
            block_time: 1_719_800_000,
            time: "2024-07-01T02:13:20.450Z".to_string(),
            activity_type: Some("ACTIVITY_SPL_TRANSFER".to_string()),
            from_address: format!("{}-from", flow),
            to_address: format!("{}-to", flow),
            token_address: token.to_string(),
            token_decimals: decimals,
            amount,
            flow,
        }
    }

    #[test]
    fn pairs_in_and_out_leg_of_one_transaction() {
        let transfers = vec![
            transfer("abc", Flow::In, 1_000_000, 6, "usdc"),
            transfer("abc", Flow::Out, 500_000_000, 9, "sol"),
        ];
        let swaps = assemble(&transfers).unwrap();

        assert_eq!(swaps.len(), 1);
        let swap = &swaps[0];
        assert_eq!(swap.trans_id, "abc");
        assert_eq!(swap.amount_in, 1.0);
        assert_eq!(swap.amount_out, 0.5);
        assert_eq!(swap.token_in_address, "usdc");
        assert_eq!(swap.token_out_address, "sol");
        assert_eq!(swap.owner_address, "in-from");
        assert_eq!(swap.timestamp, 1_719_800_000);
        assert_eq!(swap.datetime.to_string(), "2024-07-01 02:13:20");
    }

    #[test]
    fn unmatched_legs_are_dropped() {
        let transfers = vec![
            transfer("only-in", Flow::In, 1, 0, "a"),
            transfer("only-out", Flow::Out, 1, 0, "b"),
            transfer("both", Flow::Out, 2, 0, "b"),
            transfer("both", Flow::In, 3, 0, "a"),
        ];
        let swaps = assemble(&transfers).unwrap();
        assert_eq!(swaps.len(), 1);
        assert_eq!(swaps[0].trans_id, "both");
        assert_eq!(swaps[0].amount_in, 3.0);
        assert_eq!(swaps[0].amount_out, 2.0);
    }

    #[test]
    fn multi_leg_transaction_yields_cross_product() {
        let transfers = vec![
            transfer("hop", Flow::In, 1, 0, "a"),
            transfer("hop", Flow::In, 2, 0, "b"),
            transfer("hop", Flow::Out, 10, 0, "c"),
            transfer("hop", Flow::Out, 20, 0, "d"),
        ];
        let swaps = assemble(&transfers).unwrap();
        let pairs: Vec<(f64, f64)> = swaps.iter().map(|s| (s.amount_in, s.amount_out)).collect();
        assert_eq!(pairs, vec![(1.0, 10.0), (1.0, 20.0), (2.0, 10.0), (2.0, 20.0)]);
    }

    #[test]
    fn timestamp_comes_from_block_time() {
        let mut leg = transfer("t", Flow::In, 1, 0, "a");
        leg.block_time = 42;
        let normalized = normalize(&[leg]).unwrap();
        assert_eq!(normalized[0].timestamp, 42);
        assert_eq!(normalized[0].datetime.to_string(), "2024-07-01 02:13:20");
    }

    #[test]
    fn malformed_time_is_reported() {
        let mut leg = transfer("bad", Flow::In, 1, 0, "a");
        leg.time = "soon".to_string();
        let err = normalize(&[leg]).unwrap_err();
        assert!(matches!(err, ETLError::MalformedTime { trans_id, .. } if trans_id == "bad"));
    }

    #[test]
    fn scaling_can_be_reversed() {
        assert_eq!(scale_amount(123, 0), 123.0);
        for (amount, decimals) in [(1u64, 9u32), (987_654_321, 6), (u64::MAX, 18), (5, 30)] {
            let scaled = scale_amount(amount, decimals);
            let restored = scaled * 10f64.powi(decimals as i32);
            let tolerance = (amount as f64) * 1e-12;
            assert!((restored - amount as f64).abs() <= tolerance, "{amount} @ {decimals}");
        }
    }

    #[test]
    fn empty_input_produces_no_swaps() {
        assert!(assemble(&[]).unwrap().is_empty());
    }
}
