use torus_shapes_rendering::{write_blocks, Renderer};
use torus_shapes_system_survey::survey_rows;

fn render_grid(rows: &[Vec<u8>]) -> String {
    let registry = survey_rows(rows).expect("valid grid");
    let blocks = Renderer::default().render_all(registry.exemplars(), rows.len(), rows[0].len());
    let mut sink = Vec::new();
    write_blocks(&blocks, &mut sink).expect("writing to memory succeeds");
    String::from_utf8(sink).expect("blocks are utf-8")
}

#[test]
fn center_cell_renders_one_block() {
    let output = render_grid(&[vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);

    assert_eq!(output, "    X\n-----\n");
}

#[test]
fn congruent_copies_render_once() {
    let output = render_grid(&[
        vec![0, 1, 1, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]);

    assert_eq!(output, "    XX\n    X \n    X \n------\n");
}

#[test]
fn shape_wrapping_vertically_renders_across_the_gap() {
    let output = render_grid(&[
        vec![0, 1, 1, 1, 0],
        vec![0, 1, 0, 1, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0],
    ]);

    assert_eq!(
        output,
        "    XXX\n    X X\n    XXX\n       \n    XX \n-------\n"
    );
}

#[test]
fn copies_joined_through_the_bottom_edge_form_one_shape() {
    let output = render_grid(&[
        vec![0, 1, 1, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0],
        vec![0, 1, 0, 0, 0],
        vec![0, 1, 0, 0, 0],
    ]);

    assert_eq!(
        output,
        "    XX\n    X \n    X \n      \n    XX\n    X \n    X \n------\n"
    );
}

#[test]
fn shape_crossing_the_right_edge_renders_as_one_block() {
    let output = render_grid(&[vec![0, 0, 0, 1], vec![1, 1, 1, 1], vec![0, 0, 0, 1]]);

    assert_eq!(output, "       X\n    XXXX\n       X\n--------\n");
}

#[test]
fn split_cross_renders_two_blocks_in_discovery_order() {
    let output = render_grid(&[
        vec![0, 0, 1, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 0, 0, 0],
    ]);

    assert_eq!(output, "     X \n    XXX\n-------\n    X\n-----\n");
}

#[test]
fn empty_grid_renders_nothing() {
    let output = render_grid(&[vec![0, 0], vec![0, 0]]);

    assert!(output.is_empty());
}
