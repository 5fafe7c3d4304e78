use crate::layout::geometry::{
    Location, dedicated_location, rotating_location, rotating_parity_disk, striped_location,
    stripe_of,
};

#[test]
fn striped_blocks_fan_out_round_robin() {
    assert_eq!(striped_location(0, 5), Location { disk: 0, offset: 0 });
    assert_eq!(striped_location(4, 5), Location { disk: 4, offset: 0 });
    assert_eq!(striped_location(5, 5), Location { disk: 0, offset: 1 });
    assert_eq!(striped_location(12, 5), Location { disk: 2, offset: 2 });
}

#[test]
fn stripe_numbering_follows_data_disk_count() {
    assert_eq!(stripe_of(0, 4), 0);
    assert_eq!(stripe_of(3, 4), 0);
    assert_eq!(stripe_of(4, 4), 1);
    assert_eq!(stripe_of(11, 4), 2);
}

#[test]
fn dedicated_mapping_never_lands_on_parity_disk() {
    // 5 disks: data on 0..=3, parity fixed on 4.
    for block in 0..40 {
        let loc = dedicated_location(block, 4);
        assert!(loc.disk < 4, "block {block} must map to a data disk");
        assert_eq!(loc.offset, block / 4);
    }
}

#[test]
fn rotating_parity_walks_backwards_with_period_five() {
    let expected = [4, 3, 2, 1, 0, 4];
    for (stripe, want) in expected.iter().enumerate() {
        assert_eq!(
            rotating_parity_disk(stripe as u64, 5),
            *want,
            "stripe {stripe}"
        );
    }
}

#[test]
fn rotating_mapping_skips_the_parity_disk() {
    for block in 0..60 {
        let loc = rotating_location(block, 5);
        let parity = rotating_parity_disk(loc.offset, 5);
        assert_ne!(loc.disk, parity, "block {block} must avoid parity disk");
        assert!(loc.disk < 5);
    }
}

#[test]
fn rotating_mapping_shifts_past_parity() {
    // Stripe 0 puts parity on disk 4: offsets 0..=3 stay on disks 0..=3.
    assert_eq!(rotating_location(0, 5), Location { disk: 0, offset: 0 });
    assert_eq!(rotating_location(3, 5), Location { disk: 3, offset: 0 });

    // Stripe 4 puts parity on disk 0: offsets 0..=3 shift to disks 1..=4.
    assert_eq!(rotating_location(16, 5), Location { disk: 1, offset: 4 });
    assert_eq!(rotating_location(19, 5), Location { disk: 4, offset: 4 });

    // Stripe 2 puts parity on disk 2: offsets straddle it.
    assert_eq!(rotating_location(8, 5), Location { disk: 0, offset: 2 });
    assert_eq!(rotating_location(9, 5), Location { disk: 1, offset: 2 });
    assert_eq!(rotating_location(10, 5), Location { disk: 3, offset: 2 });
    assert_eq!(rotating_location(11, 5), Location { disk: 4, offset: 2 });
}

#[test]
fn rotating_mapping_covers_every_data_slot_exactly_once() {
    // Within one stripe the data blocks must occupy all non-parity disks.
    for stripe in 0..10u64 {
        let parity = rotating_parity_disk(stripe, 5);
        let mut seen = [false; 5];
        for offset in 0..4u64 {
            let loc = rotating_location(stripe * 4 + offset, 5);
            assert_eq!(loc.offset, stripe);
            assert!(!seen[loc.disk], "disk used twice in stripe {stripe}");
            seen[loc.disk] = true;
        }
        assert!(!seen[parity]);
        assert_eq!(seen.iter().filter(|&&s| s).count(), 4);
    }
}
