//! Example: scanning a read for primer sites.
//!
//! Builds a trie from a handful of primers, prints its edges in both traversal
//! orders, and lists where the primers occur.
//!
//! Run with: cargo run --example scan

use dnatrie::trie::{build_trie, Order, Trie};

fn print_edges(trie: &Trie, order: Order) {
    println!("{order:?}:");
    for edge in trie.edges(order) {
        println!("  {edge}");
    }
}

fn main() {
    let primers = ["GATC", "GAT", "TTAG", "CCA"];
    let read = "CCATTAGGATCGATTTAGCCA";
    let trie = build_trie(primers);

    println!("{} nodes for {} primers", trie.node_count(), primers.len());
    print_edges(&trie, Order::PreOrder);
    print_edges(&trie, Order::PostOrder);

    println!("\nMatches in {read}:");
    for offset in trie.matches(read.as_bytes()) {
        // The walk stops at the first primer on its path, so GAT shadows GATC.
        let len = trie.prefix_match_len(read.as_bytes(), offset).unwrap_or(0);
        println!("  {offset:>3}  {}", &read[offset..offset + len]);
    }
}
