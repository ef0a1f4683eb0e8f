// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Demo: hide or reveal a text message in a PNG image.
//!
//! The password comes in as an argument; an interactive frontend should
//! prompt for it twice and compare before calling into the library.

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: hide_text <cover.png> <message> <password> [output.png]");
        eprintln!("       hide_text --reveal <stego.png> <password>");
        process::exit(1);
    }

    if args[1] == "--reveal" {
        let stego = image::open(&args[2]).expect("could not open stego image").to_rgba8();
        match veil_core::reveal_message(&stego, &args[3]) {
            Ok(message) => println!("Hidden message: {message}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        let cover = image::open(&args[1]).expect("could not open cover image").to_rgba8();
        let out_path = args.get(4).cloned().unwrap_or_else(|| "stego.png".to_owned());

        let stego = match veil_core::hide_message(&cover, &args[2], &args[3]) {
            Ok(img) => img,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };

        // PNG only: a lossy format would destroy the LSB payload.
        stego.save(&out_path).expect("could not write stego image");
        println!("Stego image written to: {out_path}");
        println!(
            "Distortion: {:.2} dB PSNR",
            veil_core::psnr(&cover, &stego).unwrap()
        );
    }
}
