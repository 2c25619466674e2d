//! Interactive nearest-store lookup flow.
//!
//! Prompts for a CEP and a store keyword, runs the full pipeline (geocode →
//! nearby search → batched distances → ranking → place details) and opens
//! the driving route in the system browser. "Not found" outcomes print a
//! plain message and end the run cleanly; transport and API failures
//! propagate as errors.

use std::io::{self, BufRead, Write};

use lojaprox_core::AppConfig;
use lojaprox_maps::{lookup, route, LookupError, MapsClient};

use crate::browser;

pub async fn run(config: &AppConfig, cep: Option<String>, tipo: Option<String>) -> anyhow::Result<()> {
    let client = MapsClient::new(
        &config.google_maps_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    println!("=== Buscar loja mais próxima ===");
    let cep = match cep {
        Some(value) => value,
        None => prompt("Qual o seu CEP? ")?,
    };
    let tipo = match tipo {
        Some(value) => value,
        None => prompt("Qual o tipo de loja que você está procurando? ")?,
    };

    let origin = match lookup::geocode_postal_code(&client, &cep).await {
        Ok(location) => location,
        Err(LookupError::PostalCodeNotFound(_)) => {
            println!("CEP não encontrado.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    println!(
        "Sua localização: {} ({:.6}, {:.6})",
        origin.formatted_address, origin.coordinates.lat, origin.coordinates.lng
    );

    let stores =
        lookup::find_nearby_stores(&client, origin.coordinates, &tipo, config.nearby_max_results)
            .await?;
    if stores.is_empty() {
        println!("Nenhuma loja encontrada.");
        return Ok(());
    }

    let distances = lookup::measure_distances(&client, origin.coordinates, &stores).await?;
    let paired = lookup::pair_with_distances(stores, distances)?;

    println!();
    println!("Lojas próximas:");
    for (i, store) in paired.iter().enumerate() {
        println!("{:02}. {}", i + 1, store.name);
        println!("    Endereço: {}", store.address);
        println!(
            "    Distância/Tempo: {} / {}",
            store.distance_text, store.duration_text
        );
    }

    let ranked = lookup::rank_by_distance(paired);
    let Some(nearest) = ranked.first() else {
        // Unreachable: the store list was checked non-empty above.
        return Ok(());
    };

    let destination = lookup::resolve_destination(&client, &nearest.place_id).await?;

    println!();
    println!("Loja mais próxima: {} - {}", nearest.name, nearest.address);
    println!(
        "Destino: {} ({:.6}, {:.6})",
        destination.label, destination.coordinates.lat, destination.coordinates.lng
    );

    let url = route::driving_route_url(origin.coordinates, destination.coordinates);
    println!();
    println!("Rota: {url}");
    match browser::open_in_browser(url.as_str()) {
        Ok(()) => println!("Abrindo no navegador..."),
        Err(e) => tracing::warn!(error = %e, "não foi possível abrir o navegador"),
    }

    Ok(())
}

/// Prints `label`, flushes, and reads one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
