mod meta_property_tests;
