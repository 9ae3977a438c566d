use super::*;

// ============================================================================
// BufferSlot::parse tests
// ============================================================================

#[test]
fn test_unprefixed_names_stay_in_vertex_buffer_zero() {
    for name in ["position", "normal_ws", "instanceColor", "albedo_uv", "_padding", "i", "a"] {
        let (slot, stripped) = BufferSlot::parse(name);
        assert_eq!(slot, BufferSlot::vertex(0), "{}", name);
        assert_eq!(stripped, name);
    }
}

#[test]
fn test_numbered_instance_prefix() {
    let (slot, stripped) = BufferSlot::parse("i3_foo");
    assert_eq!(slot, BufferSlot::instance(3));
    assert!(slot.per_instance);
    assert_eq!(stripped, "foo");
}

#[test]
fn test_bare_vertex_prefix() {
    let (slot, stripped) = BufferSlot::parse("a_bar");
    assert_eq!(slot, BufferSlot::vertex(0));
    assert_eq!(stripped, "bar");
}

#[test]
fn test_bare_instance_prefix() {
    let (slot, stripped) = BufferSlot::parse("i_transform");
    assert_eq!(slot, BufferSlot::instance(0));
    assert_eq!(stripped, "transform");
}

#[test]
fn test_numbered_vertex_prefix_keeps_inner_underscores() {
    let (slot, stripped) = BufferSlot::parse("a12_normal_map");
    assert_eq!(slot, BufferSlot::vertex(12));
    assert_eq!(stripped, "normal_map");
}

#[test]
fn test_bare_numeric_prefix() {
    let (slot, stripped) = BufferSlot::parse("2_tangent");
    assert_eq!(slot, BufferSlot::vertex(2));
    assert_eq!(stripped, "tangent");
}

#[test]
fn test_letter_words_are_not_prefixes() {
    // 'i' and 'a' followed by letters are ordinary names
    let (slot, stripped) = BufferSlot::parse("index_id");
    assert_eq!(slot, BufferSlot::vertex(0));
    assert_eq!(stripped, "index_id");

    let (slot, stripped) = BufferSlot::parse("a1b_x");
    assert_eq!(slot, BufferSlot::vertex(0));
    assert_eq!(stripped, "a1b_x");
}

#[test]
fn test_overflowing_index_is_not_a_prefix() {
    let (slot, stripped) = BufferSlot::parse("i99999999999_x");
    assert_eq!(slot, BufferSlot::vertex(0));
    assert_eq!(stripped, "i99999999999_x");
}

#[test]
fn test_slot_order_puts_vertex_before_instance() {
    let mut slots = vec![
        BufferSlot::instance(0),
        BufferSlot::vertex(3),
        BufferSlot::instance(1),
        BufferSlot::vertex(0),
    ];
    slots.sort();
    assert_eq!(slots, vec![
        BufferSlot::vertex(0),
        BufferSlot::vertex(3),
        BufferSlot::instance(0),
        BufferSlot::instance(1),
    ]);
}

// ============================================================================
// Section tests
// ============================================================================

#[test]
fn test_offsets_accumulate_into_stride() {
    let mut table = SectionTable::new();
    assert_eq!(table.push(BufferSlot::vertex(0), 12).unwrap(), 0);
    assert_eq!(table.push(BufferSlot::vertex(0), 8).unwrap(), 12);
    assert_eq!(table.push(BufferSlot::vertex(0), 4).unwrap(), 20);
    assert_eq!(table.get(BufferSlot::vertex(0)).unwrap().stride, 24);
}

#[test]
fn test_same_slot_shares_a_section() {
    let mut table = SectionTable::new();
    table.push(BufferSlot::vertex(2), 16).unwrap();
    table.push(BufferSlot::vertex(2), 16).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(BufferSlot::vertex(2)).unwrap().stride, 32);
}

#[test]
fn test_section_instancing_is_immutable() {
    let mut section = VertexSection::new(false);
    section.push(BufferSlot::vertex(2), 16).unwrap();
    section.push(BufferSlot::vertex(2), 16).unwrap();

    let result = section.push(BufferSlot::instance(2), 16);
    assert!(matches!(result, Err(Error::SectionConflict { buffer: 2, per_instance: true })));
    assert_eq!(section.stride, 32);
    assert!(!section.per_instance);
}

#[test]
fn test_vertex_and_instance_slots_are_distinct() {
    let mut table = SectionTable::new();
    table.push(BufferSlot::vertex(0), 12).unwrap();
    table.push(BufferSlot::instance(0), 64).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_finish_renumbers_instances_after_vertices() {
    let mut table = SectionTable::new();
    table.push(BufferSlot::instance(1), 16).unwrap();
    table.push(BufferSlot::vertex(4), 8).unwrap();
    table.push(BufferSlot::instance(0), 64).unwrap();
    table.push(BufferSlot::vertex(1), 12).unwrap();

    let (sections, remap) = table.finish();
    assert_eq!(sections.len(), 4);
    assert_eq!(remap[&BufferSlot::vertex(1)], 0);
    assert_eq!(remap[&BufferSlot::vertex(4)], 1);
    assert_eq!(remap[&BufferSlot::instance(0)], 2);
    assert_eq!(remap[&BufferSlot::instance(1)], 3);

    assert_eq!(sections[0], VertexSection { stride: 12, per_instance: false });
    assert_eq!(sections[1], VertexSection { stride: 8, per_instance: false });
    assert_eq!(sections[2], VertexSection { stride: 64, per_instance: true });
    assert_eq!(sections[3], VertexSection { stride: 16, per_instance: true });
}

#[test]
fn test_finish_empty_table() {
    let (sections, remap) = SectionTable::new().finish();
    assert!(sections.is_empty());
    assert!(remap.is_empty());
}
