mod play_all_tests;
