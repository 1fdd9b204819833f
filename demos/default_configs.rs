use chrono::Local;
use hedge_lib::models::utils::start_of_day;
use hedge_lib::{
    calculate_price_scenarios, default_configs, ContractWindow, HedgeConfig, ScenarioStatistics,
};

fn main() {
    println!("Hedge-lib Default Configuration Examples\n");

    let presets = [
        ("Quick", default_configs::quick(), "Tests, interactive checks"),
        ("Standard", default_configs::standard(), "Everyday hedge reports"),
        ("High resolution", default_configs::high_resolution(), "Stable tail percentiles"),
    ];

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!("   Risk-free rate: {:.2}%", config.risk_free_rate * 100.0);
        println!("   Volatility: {:.0}%", config.volatility * 100.0);
        println!("   Coverage percentile: {:.0}%", config.coverage_percentile);
        println!("   Student-t scenarios: {}", config.scenarios.count);
        println!(
            "   Extreme scenarios: {} (normal, std dev {})",
            config.scenarios.extreme_count(config.scenarios.count),
            config.scenarios.extreme_std_dev
        );
        println!("   Seed: {}", config.scenarios.seed);
        println!("   Use case: {}\n", use_case);
    }

    // Overriding a preset from TOML
    println!("4. Custom configuration from TOML:");
    let custom = HedgeConfig::from_toml_str(
        r#"
        volatility = 0.35
        coverage_percentile = 90.0

        [scenarios]
        count = 2000
        seed = 7
        "#,
    );
    match &custom {
        Ok(config) => {
            println!("   Volatility: {:.0}%", config.volatility * 100.0);
            println!("   Coverage percentile: {:.0}%", config.coverage_percentile);
            println!("   Total scenarios: {}\n", config.scenarios.total_scenarios());
        }
        Err(e) => println!("   ❌ Invalid configuration: {:#}\n", e),
    }

    // Example simulation using the quick preset
    println!("Running example simulation with quick config...");
    let today = Local::now().date_naive();
    let config = default_configs::quick();
    let window = ContractWindow::from_start(today, 90);
    let simulated = config.market(100.0).and_then(|market| {
        calculate_price_scenarios(&market, &window, &config.scenarios, start_of_day(today))
    });
    match simulated {
        Ok(scenarios) => match ScenarioStatistics::from_scenarios(&scenarios) {
            Some(stats) => {
                println!("✅ Simulation successful!");
                println!("   Scenarios: {}", stats.count);
                println!("   Mean: {:.2}, median: {:.2}", stats.mean, stats.median);
                println!("   P95: {:.2}", stats.percentiles.p95);
            }
            None => println!("❌ No scenarios produced"),
        },
        Err(e) => {
            println!("❌ Simulation failed: {}", e);
        }
    }
}
