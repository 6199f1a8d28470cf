mod classes_tests;
