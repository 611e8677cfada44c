use datasmith_core::FieldKind;

fn main() {
    for kind in FieldKind::ALL {
        println!("{kind}");
    }
}
