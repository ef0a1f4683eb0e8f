// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Demo: hide or reveal a secret image inside a cover PNG.

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let reveal_mode = args.len() >= 2 && args[1] == "--reveal";
    if (reveal_mode && args.len() < 4) || (!reveal_mode && args.len() < 5) {
        eprintln!("Usage: hide_image <cover.png> <secret.png> <password> <output.png>");
        eprintln!("       hide_image --reveal <stego.png> <password> [revealed.png]");
        process::exit(1);
    }

    if reveal_mode {
        let stego = image::open(&args[2]).expect("could not open stego image").to_rgba8();
        let out_path = args.get(4).cloned().unwrap_or_else(|| "revealed.png".to_owned());
        match veil_core::reveal_image(&stego, &args[3]) {
            Ok(secret) => {
                secret.save(&out_path).expect("could not write revealed image");
                println!("Hidden image written to: {out_path}");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        let cover = image::open(&args[1]).expect("could not open cover image").to_rgba8();
        let secret = image::open(&args[2]).expect("could not open secret image").to_rgba8();

        let (cw, ch) = cover.dimensions();
        let needed = 4 + secret.as_raw().len();
        println!(
            "Carrier capacity: {} bytes, secret frame: {} bytes",
            veil_core::available_bytes(cw, ch),
            needed
        );

        let stego = match veil_core::hide_image(&cover, &secret, &args[3]) {
            Ok(img) => img,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };
        stego.save(&args[4]).expect("could not write stego image");
        println!("Stego image written to: {}", args[4]);
    }
}
