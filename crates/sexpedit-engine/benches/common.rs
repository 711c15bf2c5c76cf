/// Generates `n` top-level definitions of moderately nested Lisp source.
pub fn generate_source(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!(
            "(defn f{i} [x y]\n  (let [m {{:a x :b [y {i}]}}]\n    (str \"v\" (get m :a) (inc {i}))))\n\n"
        ));
    }
    out
}
