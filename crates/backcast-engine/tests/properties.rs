//! Property tests for the projection invariants.

use proptest::prelude::*;

use backcast_engine::{estimate, BackupMode, Inputs, Rates};

fn mode_strategy() -> impl Strategy<Value = BackupMode> {
    prop_oneof![
        Just(BackupMode::None),
        Just(BackupMode::BlobsOperational),
        Just(BackupMode::BlobsVaulted),
    ]
}

fn inputs_strategy() -> impl Strategy<Value = Inputs> {
    (
        (0u64..500, 0.0f64..8.0, 0.0f64..4096.0),
        (0u64..500, 0u64..200, 0u32..6, 0u32..6),
        (-0.9f64..1.5, 1u32..12),
        mode_strategy(),
        (0.0f64..20.0, 0.0f64..1.0, 0.0f64..10_000.0),
        (0.0f64..100.0, 0.0f64..1.0),
    )
        .prop_map(
            |(
                (clients, envs, size_mb),
                (deploys, prs, regions, accounts),
                (growth, years),
                mode,
                (pi_price, write_price, write_ops),
                (vault_gb, vault_price),
            )| {
                let mut inputs = Inputs::new(clients, envs, size_mb, deploys, prs, regions, accounts)
                    .with_growth(growth, years)
                    .with_backup_mode(mode);
                inputs.blob_vaulted_pi_price_per_month = pi_price;
                inputs.blob_vaulted_write_per_10k_price = write_price;
                inputs.blob_vaulted_write_ops_per_month_per_account = write_ops;
                inputs.backup_vault_storage_gb_per_account_month = vault_gb;
                inputs.backup_vault_storage_price_per_gb_month = vault_price;
                inputs
            },
        )
}

fn rates_strategy() -> impl Strategy<Value = Rates> {
    (
        0.0f64..0.1,
        0.0f64..0.1,
        0.0f64..0.1,
        0.0f64..0.1,
        0.0f64..0.1,
        0.0f64..5.0,
    )
        .prop_map(
            |(storage, read, write, pe_hour, pe_data, log)| Rates {
                storage_gb_month_price: storage,
                read_txn_per_10k_price: read,
                write_txn_per_10k_price: write,
                private_endpoint_hour_price: pe_hour,
                private_link_data_price_per_gb: pe_data,
                log_ingestion_price_per_gb: log,
            },
        )
}

proptest! {
    #[test]
    fn grand_total_equals_sum_of_year_totals(
        inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        let report = estimate(&inputs, &rates).unwrap();
        let sum: f64 = report.by_year.iter().map(|y| y.year_total_cost).sum();
        prop_assert_eq!(report.grand_total, sum);
    }

    #[test]
    fn every_cost_is_finite_and_non_negative(
        inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        let report = estimate(&inputs, &rates).unwrap();
        prop_assert!(report.grand_total.is_finite() && report.grand_total >= 0.0);
        for year in &report.by_year {
            for cost in [
                year.storage_cost_year,
                year.transactions.total_txn_cost,
                year.private_link.total_pl_cost,
                year.logging.ingestion_cost_year,
                year.backup.total_cost(),
                year.year_total_cost,
            ] {
                prop_assert!(cost.is_finite() && cost >= 0.0);
            }
        }
    }

    #[test]
    fn horizon_shape_and_fixed_infrastructure(
        inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        let report = estimate(&inputs, &rates).unwrap();
        prop_assert_eq!(report.horizon(), inputs.years as usize);
        for (i, year) in report.by_year.iter().enumerate() {
            prop_assert_eq!(year.year_index as usize, i + 1);
            prop_assert_eq!(year.storage_accounts, inputs.total_accounts());
        }
    }

    #[test]
    fn mode_none_never_adds_backup_cost(
        inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        let inputs = inputs.with_backup_mode(BackupMode::None);
        let report = estimate(&inputs, &rates).unwrap();
        for year in &report.by_year {
            prop_assert_eq!(year.backup.total_cost(), 0.0);
            prop_assert_eq!(year.backup.per_account_size_gb, 0.0);
            prop_assert_eq!(
                year.year_total_cost,
                year.storage_cost_year
                    + year.transactions.total_txn_cost
                    + year.private_link.total_pl_cost
                    + year.logging.ingestion_cost_year
            );
        }
    }

    #[test]
    fn vaulted_total_exceeds_operational_by_backup_fees(
        inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        let operational = estimate(
            &inputs.clone().with_backup_mode(BackupMode::BlobsOperational),
            &rates,
        )
        .unwrap();
        let vaulted = estimate(
            &inputs.with_backup_mode(BackupMode::BlobsVaulted),
            &rates,
        )
        .unwrap();

        for (op, vault) in operational.by_year.iter().zip(&vaulted.by_year) {
            prop_assert_eq!(
                vault.year_total_cost,
                op.year_total_cost + vault.backup.total_cost()
            );
        }
    }

    #[test]
    fn zero_accounts_never_faults(
        mut inputs in inputs_strategy(),
        rates in rates_strategy(),
    ) {
        inputs.num_regions = 0;
        let report = estimate(&inputs, &rates).unwrap();
        for year in &report.by_year {
            prop_assert_eq!(year.logging.ingestion_cost_year, 0.0);
            prop_assert_eq!(year.backup.total_cost(), 0.0);
        }
    }

    #[test]
    fn growth_rate_at_or_below_minus_one_is_rejected(
        rate in -5.0f64..=-1.0,
        rates in rates_strategy(),
    ) {
        let inputs = Inputs::new(100, 2.0, 10.0, 10, 5, 1, 1).with_growth(rate, 3);
        prop_assert!(estimate(&inputs, &rates).is_err());
    }
}
