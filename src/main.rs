//! Command-line driver for ryb_channels
//!
//! Decomposes an image into per-channel files, or inspects a single color
//! with `--complement`.

use ryb_channels::color::{checked_complementary, rgb_to_ryb, Channel, ColorSystem};
use ryb_channels::{decompose_to_files, ChannelError, DecomposeConfig};
use std::{env, path::{Path, PathBuf}, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut output_dir: Option<PathBuf> = None;
    let mut grayscale = false;
    let mut recombine = false;
    let mut system = ColorSystem::Ryb;
    let mut channels: Option<Vec<Channel>> = None;
    let mut complement: Option<String> = None;
    let mut image_path_arg: Option<String> = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(expect_value(&args, i, "--config")));
            }
            "--output" => {
                i += 1;
                output_dir = Some(PathBuf::from(expect_value(&args, i, "--output")));
            }
            "--grayscale" => grayscale = true,
            "--recombine" => recombine = true,
            "--system" => {
                i += 1;
                system = match ColorSystem::from_name(expect_value(&args, i, "--system")) {
                    Ok(system) => system,
                    Err(error) => fail(&error),
                };
            }
            "--channels" => {
                i += 1;
                channels = Some(parse_channels(expect_value(&args, i, "--channels")));
            }
            "--complement" => {
                i += 1;
                complement = Some(expect_value(&args, i, "--complement").to_string());
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(color) = complement {
        print_complement(&color);
        return;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };
    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    // Start from a config file when given, then apply flag overrides
    let mut config = match config_path {
        Some(path) => match DecomposeConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: Failed to read config {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => DecomposeConfig::default(),
    };
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    if grayscale {
        config.isolation.colored = false;
    }
    if recombine {
        config.isolation.enabled = false;
        config.recombination.enabled = true;
        config.recombination.color_system = system;
    }
    if let Some(channels) = channels {
        config.isolation.channels = channels.clone();
        config.recombination.channels = channels;
    }

    match decompose_to_files(image_path, &config) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
        }
        Err(error) => fail(&error),
    }
}

fn expect_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

fn parse_channels(tags: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    for tag in tags.split(',') {
        match Channel::from_tag(tag.trim()) {
            Ok(channel) => channels.push(channel),
            Err(error) => fail(&error),
        }
    }
    channels
}

/// Print the complement of "R,G,B" and the RYB renderings of both
fn print_complement(color: &str) -> ! {
    let parts: Vec<&str> = color.split(',').collect();
    if parts.len() != 3 {
        eprintln!("Error: --complement expects R,G,B (e.g. 255,128,0)");
        process::exit(1);
    }
    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = match part.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: invalid channel value {:?}", part.trim());
                process::exit(1);
            }
        };
    }

    let [r, g, b] = values;
    match checked_complementary(r, g, b, 255.0) {
        Ok((cr, cg, cb)) => {
            let ryb = rgb_to_ryb(r as u8, g as u8, b as u8);
            let comp_ryb = rgb_to_ryb(cr as u8, cg as u8, cb as u8);
            println!("RGB:        ({}, {}, {})", r, g, b);
            println!("RYB:        ({}, {}, {})", ryb.0, ryb.1, ryb.2);
            println!("Complement: ({}, {}, {})", cr, cg, cb);
            println!("Comp RYB:   ({}, {}, {})", comp_ryb.0, comp_ryb.1, comp_ryb.2);
            process::exit(0);
        }
        Err(error) => fail(&error),
    }
}

fn fail(error: &ChannelError) -> ! {
    eprintln!("Decomposition failed: {}", error);
    eprintln!("Suggestion: {}", error.user_message());
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Decompose an image into per-channel visualizations via RYB conversion.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE      Load a JSON decomposition config");
    eprintln!("  --output DIR       Output directory (default: current directory)");
    eprintln!("  --grayscale        Write raw grayscale planes instead of colored images");
    eprintln!("  --recombine        Write two-channel recombinations instead of isolations");
    eprintln!("  --system SYS       Mixing rule for --recombine: rgb or ryb (default: ryb)");
    eprintln!("  --channels TAGS    Comma-separated channel tags, e.g. R,Y (default: R,Y,B)");
    eprintln!("  --complement R,G,B Print the complementary color and exit");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} forest.jpg", program_name);
    eprintln!("  {} --recombine --system ryb --output out/ forest.jpg", program_name);
    eprintln!("  {} --complement 255,128,0", program_name);
}
