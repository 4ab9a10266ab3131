//! `avl-demo` — build a [`BalancedIndex`] and show its shape.
//!
//! Usage:
//!   avl-demo [KEY...]
//!
//! With no arguments the built-in scenario runs: insert 10, 20, 30, 40, 50,
//! 25, delete 30, then search 25. Otherwise every argument is parsed as an
//! integer key and inserted. Log verbosity follows `RUST_LOG`.

use balanced_index::BalancedIndex;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut out = io::stdout().lock();
    let mut index = BalancedIndex::new();

    if args.is_empty() {
        for k in [10, 20, 30, 40, 50, 25] {
            index.insert(k);
        }
        info!(size = index.size(), height = index.height(), "built scenario tree");
        writeln!(out, "In-order traversal of the constructed AVL tree is:").unwrap();
        writeln!(out, "{:?}", index.in_order()).unwrap();
        writeln!(out, "{}", index.print()).unwrap();

        index.delete(&30);
        writeln!(out, "In-order traversal after deletion of 30:").unwrap();
        writeln!(out, "{:?}", index.in_order()).unwrap();
        writeln!(out, "{}", index.print()).unwrap();

        match index.search(&25) {
            Some(n) => writeln!(out, "Node with key 25 found: {}", n.key()).unwrap(),
            None => writeln!(out, "Node with key 25 not found.").unwrap(),
        }
        return;
    }

    for arg in &args {
        let key: i64 = match arg.parse() {
            Ok(k) => k,
            Err(e) => {
                eprintln!("Invalid key {arg:?}: {e}");
                std::process::exit(1);
            }
        };
        if !index.insert(key) {
            info!(key, "duplicate key ignored");
        }
    }
    writeln!(out, "{:?}", index.in_order()).unwrap();
    writeln!(out, "{}", index.print()).unwrap();
}
