mod acquire;
