mod test_arc_fit_basic;
