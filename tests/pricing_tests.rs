mod test_utils;

use approx::assert_abs_diff_eq;
use hedge_lib::{bs_call_delta, bs_call_price, bs_put_delta, bs_put_price};
use test_utils::load_reference_table;

/// Checks prices and deltas against an independently computed reference table.
#[test]
fn test_reference_table() {
    let rows = load_reference_table("tests/data/bs_reference.csv").expect("Failed to load reference data");
    assert!(!rows.is_empty(), "Reference table should not be empty");

    for row in &rows {
        let (s, k, t, r, v) = (row.spot, row.strike, row.maturity, row.rate, row.volatility);
        assert_abs_diff_eq!(bs_call_price(s, k, t, r, v), row.call_price, epsilon = 1e-7);
        assert_abs_diff_eq!(bs_put_price(s, k, t, r, v), row.put_price, epsilon = 1e-7);
        assert_abs_diff_eq!(bs_call_delta(s, k, t, r, v), row.call_delta, epsilon = 1e-8);
        assert_abs_diff_eq!(bs_put_delta(s, k, t, r, v), row.put_delta, epsilon = 1e-8);
    }
}

/// Textbook values: S=K=100, T=1, r=5%, sigma=20%.
#[test]
fn test_standard_reference_scenario() {
    let call = bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2);
    let put = bs_put_price(100.0, 100.0, 1.0, 0.05, 0.2);
    assert_abs_diff_eq!(call, 10.4506, epsilon = 1e-4);
    assert_abs_diff_eq!(put, 5.5735, epsilon = 1e-4);

    let parity = call - put - 100.0 + 100.0 * (-0.05_f64).exp();
    assert_abs_diff_eq!(parity, 0.0, epsilon = 1e-10);
}

/// Put-call parity over a grid of spots, strikes, maturities, rates and vols.
#[test]
fn test_put_call_parity() {
    for &s in &[50.0, 100.0, 150.0] {
        for &k in &[80.0, 100.0, 120.0] {
            for &t in &[0.05, 0.5, 2.0] {
                for &r in &[0.0, 0.03, -0.01] {
                    for &v in &[0.05, 0.25, 0.8] {
                        let lhs = bs_call_price(s, k, t, r, v) - bs_put_price(s, k, t, r, v);
                        let rhs = s - k * (-r * t).exp();
                        assert!(
                            (lhs - rhs).abs() < 1e-6,
                            "parity broken at S={} K={} T={} r={} v={}: {} vs {}",
                            s, k, t, r, v, lhs, rhs
                        );
                    }
                }
            }
        }
    }
}

/// Prices converge to the boundary formulas as sigma and T shrink.
#[test]
fn test_boundary_continuity() {
    let (s, k, t, r): (f64, f64, f64, f64) = (100.0, 95.0, 1.0, 0.05);

    let zero_vol_limit = (s - k * (-r * t).exp()).max(0.0);
    assert_abs_diff_eq!(bs_call_price(s, k, t, r, 1e-6), zero_vol_limit, epsilon = 1e-6);
    assert_abs_diff_eq!(bs_call_price(s, k, t, r, 0.0), zero_vol_limit, epsilon = 1e-12);

    let expiry_limit = (s - k).max(0.0);
    assert_abs_diff_eq!(bs_call_price(s, k, 1e-10, r, 0.2), expiry_limit, epsilon = 1e-6);
    assert_abs_diff_eq!(bs_call_price(s, k, 0.0, r, 0.2), expiry_limit, epsilon = 1e-12);

    // Out of the money: both limits are zero
    assert_abs_diff_eq!(bs_call_price(80.0, 100.0, 1e-10, r, 0.2), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bs_put_price(120.0, 100.0, 1.0, r, 1e-6), 0.0, epsilon = 1e-9);
}

/// Deltas stay inside their bounds, including degenerate inputs.
#[test]
fn test_delta_bounds() {
    for &s in &[1.0, 50.0, 100.0, 200.0, 10_000.0] {
        for &t in &[-1.0, 0.0, 1e-6, 0.25, 5.0] {
            for &v in &[-0.1, 0.0, 0.01, 0.3, 2.0] {
                let call = bs_call_delta(s, 100.0, t, 0.02, v);
                let put = bs_put_delta(s, 100.0, t, 0.02, v);
                assert!((0.0..=1.0).contains(&call), "call delta {} out of bounds", call);
                assert!((-1.0..=0.0).contains(&put), "put delta {} out of bounds", put);
            }
        }
    }
}

/// Call value rises with spot and volatility.
#[test]
fn test_monotonic_in_spot_and_volatility() {
    let mut previous = 0.0;
    for i in 1..=20 {
        let s = 50.0 + 5.0 * i as f64;
        let price = bs_call_price(s, 100.0, 0.5, 0.02, 0.3);
        assert!(price > previous);
        previous = price;
    }

    let low = bs_call_price(100.0, 100.0, 0.5, 0.02, 0.1);
    let high = bs_call_price(100.0, 100.0, 0.5, 0.02, 0.4);
    assert!(high > low);
}
