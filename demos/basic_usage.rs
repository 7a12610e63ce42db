//! Basic usage example for veb-set.
//!
//! This example demonstrates the core functionality of the set.

use veb_set::VebSet;

fn main() {
    println!("=== veb-set - Basic Usage Example ===\n");

    // Create a new set over the full 32-bit key space
    let mut set = VebSet::new();
    println!("Created empty set over universe [0, 2^32)");

    // Insert some keys
    println!("\nInserting keys: 100, 200, 150, 300");
    set.insert(100);
    set.insert(200);
    set.insert(150);
    set.insert(300);
    println!("Set now contains {} keys", set.len());

    // Check membership
    println!("\nMembership checks:");
    println!("  contains(150): {}", set.contains(150));
    println!("  contains(999): {}", set.contains(999));

    // Get min/max (O(1))
    println!("\nMin/Max (O(1)):");
    println!("  min: {:?}", set.min());
    println!("  max: {:?}", set.max());

    // Navigate the set (successor/predecessor are inclusive)
    println!("\nNavigation:");
    println!("  successor(100): {:?}", set.successor(100));
    println!("  successor(175): {:?}", set.successor(175));
    println!("  predecessor(200): {:?}", set.predecessor(200));
    println!("  predecessor(175): {:?}", set.predecessor(175));

    // Iterate in sorted order
    println!("\nIteration (sorted order):");
    print!("  Keys: ");
    for key in set.iter() {
        print!("{} ", key);
    }
    println!();

    // Range queries
    println!("\nRange queries:");
    let range: Vec<u32> = set.range(100..200).collect();
    println!("  range(100..200): {:?}", range);

    let range: Vec<u32> = set.range(100..=200).collect();
    println!("  range(100..=200): {:?}", range);

    // Remove keys
    println!("\nRemoving key 150:");
    set.remove(150);
    println!("  contains(150): {}", set.contains(150));
    println!("  len: {}", set.len());

    // Removing the minimum promotes the next smallest key
    println!("\nRemoving the minimum (100):");
    set.remove(100);
    println!("  min: {:?}", set.min());

    // Demonstrate a custom universe
    println!("\n=== Custom Universe Example ===\n");
    let mut small = VebSet::with_universe(10_000);
    println!("Created set over universe [0, 10000)");

    // Insert clustered ranges (simulating real-world use cases)
    println!("Inserting clustered ranges:");
    println!("  Range 1000-1099 (100 keys)");
    for i in 1000..1100 {
        small.insert(i);
    }

    println!("  Range 2000-2099 (100 keys)");
    for i in 2000..2100 {
        small.insert(i);
    }

    println!("\nClustered set stats:");
    println!("  Total keys: {}", small.len());
    println!("  Min: {:?}", small.min());
    println!("  Max: {:?}", small.max());

    // Efficient iteration over clustered data
    println!("\nFirst 5 keys:");
    for (i, key) in small.iter().take(5).enumerate() {
        println!("  {}: {}", i + 1, key);
    }

    // Range query across the gap between clusters
    println!("\nRange query across gap:");
    let gap_range: Vec<u32> = small.range(1095..2005).collect();
    println!("  range(1095..2005) has {} keys", gap_range.len());
    println!("  First 3: {:?}", &gap_range[0..3]);
    println!("  Last 3: {:?}", &gap_range[gap_range.len() - 3..]);

    println!("\n=== Example Complete ===");
}
