//! Grows one layer of a tree pair and draws both trees.
//! Usage: `cargo run --example draw_pair | dot -Tsvg > pair.svg`

use hub_bisect::input::from_str;
use hub_bisect::tree_blocks::visualize::{draw_tree_pair, outline};
use hub_bisect::tree_pair::TreePair;

fn main() -> std::io::Result<()> {
    //  a1 -- b1
    //  a2 -- b2
    //  a3 -- b3
    // plus a4 and b4, each side a full clique
    let input = "
        a1: a2 a3 a4 b1
        a2: a3 a4 b2
        a3: a4 b3
        b1: b2 b3 b4
        b2: b3 b4
        b3: b4
        ";
    let network = from_str(input).expect("input is well formed");
    let source = network.hub("a4").expect("a4 exists");
    let target = network.hub("b4").expect("b4 exists");

    let mut pair = TreePair::new(&network, source, target);
    pair.grow_one_layer();

    eprint!("{}", outline(pair.source_tree(), |hub| network.name(hub).to_string()));
    eprint!("{}", outline(pair.target_tree(), |hub| network.name(hub).to_string()));
    print!("{}", draw_tree_pair(&pair)?);
    Ok(())
}
