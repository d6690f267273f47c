use anyhow::Context;
use clap::Parser;
use ingredient_barcode::cli::{Cli, Commands, LookupArgs, OutputFormat};
use ingredient_barcode::config::Config;
use ingredient_barcode::{report, LookupRunner, OpenFoodFactsClient, ProductDetails, SearchPage};
use ingredient_barcode_common::{LookupResult, DEFAULT_INGREDIENTS};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗しました")?;

    match cli.command.unwrap_or(Commands::Lookup(LookupArgs::default())) {
        Commands::Lookup(args) => {
            let ingredients = args.resolve_ingredients().context("食材リストを取得できません")?;
            let client = OpenFoodFactsClient::new(&config)?;

            let results = LookupRunner::new(&client)
                .with_progress(ingredients.len())
                .run(&ingredients)
                .await
                .with_context(|| format!("照会に失敗しました ({})", client.base_url()))?;

            // 全件そろってから出力
            let stdout = std::io::stdout();
            report::write_results(&mut stdout.lock(), &results, args.format)?;
        }

        Commands::Product { barcode, format } => {
            let client = OpenFoodFactsClient::new(&config)?;
            let data = client
                .product(&barcode)
                .await
                .with_context(|| format!("商品の取得に失敗しました: {}", barcode))?;

            match data {
                Some(data) => {
                    let details = ProductDetails::from_json(&data, &config.language);
                    match format {
                        OutputFormat::Text => println!("{}", details),
                        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
                    }
                }
                None => println!("{} → Aucun produit trouvé", barcode),
            }
        }

        Commands::Search { query, page, page_size } => {
            let client = OpenFoodFactsClient::new(&config)?;
            let response = client
                .search(&query, SearchPage { page, page_size })
                .await
                .with_context(|| format!("検索に失敗しました: {}", query))?;

            let results: Vec<LookupResult> = if response.products.is_empty() {
                vec![LookupResult::not_found(query.as_str())]
            } else {
                response
                    .products
                    .iter()
                    .map(|p| LookupResult::from_product(query.as_str(), p))
                    .collect()
            };

            let stdout = std::io::stdout();
            report::write_results(&mut stdout.lock(), &results, OutputFormat::Text)?;
        }

        Commands::Ingredients => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for ingredient in DEFAULT_INGREDIENTS {
                writeln!(out, "{}", ingredient)?;
            }
        }

        Commands::Config { set_base_url, set_language, set_timeout, show } => {
            let mut config = config;
            let changed = set_base_url.is_some() || set_language.is_some() || set_timeout.is_some();

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ 接続先を設定しました: {}", config.base_url);
            }

            if let Some(language) = set_language {
                config.language = language.trim().to_lowercase();
                println!("✔ 言語を設定しました: {}", config.language);
            }

            if let Some(secs) = set_timeout {
                config.timeout_seconds = (secs > 0).then_some(secs);
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save().context("設定ファイルの保存に失敗しました")?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.base_url);
                println!("  言語: {}", config.language);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: 既定値"),
                }
                println!("  User-Agent: {}", config.user_agent);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "warn,ingredient_barcode=debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
